pub mod cli;
pub mod clients;
pub mod library;
pub mod model;
pub mod persisters;
pub mod shell;

use cli::{format_table, AddArgs, Cli, Commands};
use clients::{MovieLookup, OmdbClient, OmdbConfig};
use persisters::CsvMovieStore;
use shell::{AppError, Shell};

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let store = CsvMovieStore::new(&cli.file);
    let lookup = build_lookup(&cli);
    let mut shell = Shell::open(Box::new(store), lookup)?;

    let result = match cli.command {
        Commands::List { unwatched } => {
            if unwatched {
                println!("{}", format_table(shell.library().unwatched()));
            } else {
                println!("{}", format_table(shell.library().movies()));
            }
            Ok(())
        }
        Commands::Add(args) => add_movie(&mut shell, &args).await,
        Commands::Delete { titles } => shell.delete_movies(&titles).map(|_| ()),
        Commands::Lookup { title } => lookup_movie(&shell, title).await,
        Commands::Repair => shell.repair_ratings().map(|reset| {
            log::info!("Repaired {} rating(s) in {}", reset, cli.file.display());
        }),
    };

    match result {
        Err(e) if e.is_recoverable() => {
            log::warn!("{}", e);
            Ok(())
        }
        other => other,
    }
}

fn build_lookup(cli: &Cli) -> Option<Box<dyn MovieLookup>> {
    let api_key = cli.api_key.clone()?;
    match OmdbClient::new(OmdbConfig {
        api_key,
        base_url: cli.omdb_url.clone(),
    }) {
        Ok(client) => Some(Box::new(client)),
        Err(e) => {
            log::warn!("OMDb lookups disabled: {}", e);
            None
        }
    }
}

async fn add_movie(shell: &mut Shell, args: &AddArgs) -> Result<(), AppError> {
    let mut form = args.to_form();
    if args.fetch {
        match shell.fetch_details(&mut form).await {
            Ok(()) => args.apply_overrides(&mut form),
            Err(e) => log::warn!("{}", e),
        }
    }

    shell.add_movie(&form)
}

async fn lookup_movie(shell: &Shell, title: String) -> Result<(), AppError> {
    let mut form = model::MovieForm {
        title,
        ..Default::default()
    };
    shell.fetch_details(&mut form).await?;

    println!("Title:  {}", form.title);
    println!("Year:   {}", form.year);
    println!("Genre:  {}", form.genre);
    println!("Rating: {}", form.rating);
    Ok(())
}
