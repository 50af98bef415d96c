use log::LevelFilter;

// Crates whose chatter drowns out ours at debug level.
const NOISY_CRATES: [&str; 2] = ["hyper", "reqwest"];

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, default_level(verbose));
    for name in NOISY_CRATES {
        builder.filter(Some(name), LevelFilter::Warn);
    }
    builder.format_timestamp(None).format_target(verbose);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_turns_on_debug() {
        assert_eq!(default_level(false), LevelFilter::Info);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
