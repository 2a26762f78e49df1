use clap::{value_parser, Arg, ArgAction, Command};
use livechron::configuration::{create_config, ConfigFolder};
use livechron::foundation::logging::init_logger;
use livechron::startup::{run, RunOptions};
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("livechron")
        .about("🎵 Live albums of an artist, in the order they were played 🎵")
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("artist")
                .short('a')
                .long("artist")
                .value_name("ARTIST_ID")
                .help("Spotify artist ID, URI or link (defaults to the configured artist)"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include-no-date")
                .action(ArgAction::SetTrue)
                .help("Include 'Live At/In/From' albums without a date, keyed on their release date"),
        )
        .arg(
            Arg::new("explore")
                .short('x')
                .long("explore")
                .action(ArgAction::SetTrue)
                .help("Explore related artists instead of generating the listing"),
        )
        .arg(
            Arg::new("hops")
                .short('n')
                .long("hops")
                .value_name("HOPS")
                .value_parser(value_parser!(u32))
                .help("Recursive hops for --explore; runtime grows exponentially with it"),
        )
        .subcommand(
            Command::new("config").about("🛠️ Create or update the configuration file for livechron"),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger();
    let args = cli().get_matches();

    let cfg_folder = match ConfigFolder::new() {
        Ok(folder) => folder,
        Err(e) => {
            eprintln!("\x1b[1m\x1b[31m{}\x1b[0m", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(("config", _)) = args.subcommand() {
        println!("\x1b[1m\x1b[34mConfiguring livechron...\x1b[0m");
        return match create_config(cfg_folder) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("\x1b[1m\x1b[31mFailed to create configuration: {}\x1b[0m", e);
                ExitCode::FAILURE
            }
        };
    }

    let options = RunOptions {
        artist: args.get_one::<String>("artist").cloned(),
        include_no_date: args.get_flag("include"),
        explore: args.get_flag("explore"),
        hops: args.get_one::<u32>("hops").copied(),
    };

    match run(cfg_folder, options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[1m\x1b[31m{:#}\x1b[0m", e);
            ExitCode::FAILURE
        }
    }
}
