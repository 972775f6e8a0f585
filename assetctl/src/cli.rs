use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    app().get_matches()
}

pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("assetctl")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Inspect and restore the assets embedded in this build")
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .arg(
            clap::Arg::from_usage("-d --debug 'Enable debug output'")
                .global(true),
        )
        .subcommand(
            clap::SubCommand::with_name("list")
                .about("List the names of all embedded assets"),
        )
        .subcommand(
            clap::SubCommand::with_name("dir")
                .about("List the entries below a directory of embedded assets")
                .arg(clap::Arg::from_usage("[PATH] 'Directory to list (top level when omitted)'")),
        )
        .subcommand(
            clap::SubCommand::with_name("cat")
                .about("Write the contents of an asset to stdout")
                .arg(clap::Arg::from_usage("<NAME> 'Name of the asset'")),
        )
        .subcommand(
            clap::SubCommand::with_name("info")
                .about("Show size, mode and modification time of an asset")
                .arg(clap::Arg::from_usage("<NAME> 'Name of the asset'")),
        )
        .subcommand(
            clap::SubCommand::with_name("restore")
                .about("Restore an asset or a directory of assets to disk")
                .arg(clap::Arg::from_usage(
                    "[NAME] 'Asset or directory to restore (everything when omitted)'",
                ))
                .arg(
                    clap::Arg::from_usage(
                        "--destination <output_folder> 'Folder the assets are restored into'",
                    )
                    .required(true),
                ),
        )
}
