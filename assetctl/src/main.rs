extern crate assetctl;

use std::path::Path;

use assetctl::error::{Error, Result};

fn required<'a>(cmd: &'a clap::ArgMatches, arg: &str, what: &str) -> Result<&'a str> {
    cmd.value_of(arg)
        .ok_or_else(|| Error::CliInputError(format!("{} is required.", what)))
}

fn run() -> Result<()> {
    let matches = assetctl::cli::parse_flags();

    assetctl::utils::initialize_logging_from_args(&matches);

    match matches.subcommand() {
        ("list", Some(_)) => assetctl::show::list()?,
        ("dir", Some(cmd)) => assetctl::show::dir(cmd.value_of("PATH").unwrap_or(""))?,
        ("cat", Some(cmd)) => assetctl::show::cat(required(cmd, "NAME", "NAME")?)?,
        ("info", Some(cmd)) => assetctl::show::info(required(cmd, "NAME", "NAME")?)?,
        ("restore", Some(cmd)) => {
            let destination = required(cmd, "destination", "Destination")?;
            let name = cmd.value_of("NAME").unwrap_or("");
            assetctl::recovery::restore(name, Path::new(destination))?
        }
        _ => {
            println!("No command specified or unknown command. Use --help for available commands.");
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
