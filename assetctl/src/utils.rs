use log::LevelFilter;

/// Sets up `env_logger`. `--debug` forces debug output, otherwise `RUST_LOG`
/// decides with `warn` as the fallback.
pub fn initialize_logging_from_args(matches: &clap::ArgMatches) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if matches.is_present("debug") {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

pub fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}
