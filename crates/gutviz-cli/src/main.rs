use std::fs::File;
use std::io;

use clap::{Arg, ArgAction, ArgMatches, Command};
use gutviz_lib::classification;
use gutviz_lib::errors::{handle_fatal, GutvizError, Result};
use gutviz_lib::json::{self, EncodeOptions, JsonValue};

/// Creates the root clap Command with the global `--verbose` flag.
fn create_root_command() -> Command {
    Command::new("gutviz")
        .about("Gut metabolic gene cluster visualization data tools")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
        .subcommand(
            Command::new("classify")
                .about("Look up the chemical class of a cluster type")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_name("ID")
                        .help("Cluster type identifier"),
                ),
        )
        .subcommand(Command::new("classes").about("List every known cluster type and its class"))
        .subcommand(
            Command::new("reformat")
                .about("Re-encode a JSON document")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_name("FILE")
                        .help("Input path, or - for stdin"),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print with 2-space indentation"),
                )
                .arg(
                    Arg::new("sort-keys")
                        .long("sort-keys")
                        .action(ArgAction::SetTrue)
                        .help("Emit object keys in sorted order"),
                ),
        )
}

fn run_classify(matches: &ArgMatches) -> Result<()> {
    let id = matches.get_one::<String>("id").expect("required arg");
    match classification::cluster_class(id) {
        Some(label) => {
            println!("{label}");
            Ok(())
        }
        None => Err(GutvizError::Application(format!(
            "unknown cluster type: {id}"
        ))),
    }
}

fn run_classes() -> Result<()> {
    let mut entries: Vec<_> = classification::known_cluster_types().collect();
    entries.sort();
    for (cluster, label) in entries {
        println!("{cluster}\t{label}");
    }
    Ok(())
}

fn run_reformat(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("file").expect("required arg");
    let parsed = if path == "-" {
        json::load(io::stdin().lock())?
    } else {
        json::load(File::open(path)?)?
    };
    tracing::debug!("parsed JSON document from {}", path);

    let options = EncodeOptions {
        indent: matches.get_flag("indent"),
        sort_keys: matches.get_flag("sort-keys"),
    };
    println!("{}", json::encode(&JsonValue::from(parsed), options)?);
    Ok(())
}

fn main() {
    let matches = create_root_command().get_matches();
    gutviz_lib::logger::init(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("classify", sub)) => run_classify(sub),
        Some(("classes", _)) => run_classes(),
        Some(("reformat", sub)) => run_reformat(sub),
        _ => {
            let mut cmd = create_root_command();
            cmd.print_help().map_err(Into::into)
        }
    };

    if let Err(err) = result {
        handle_fatal(err);
    }
}
