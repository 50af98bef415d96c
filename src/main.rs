use clap::Parser;

use movielog::cli::Cli;

mod logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    if let Err(e) = movielog::run(cli).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
