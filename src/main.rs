use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

mod cli;

fn main() {
    // Usage errors exit here, before anything touches the filesystem
    let matches = build_cli().get_matches();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = run_command(matches) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("gocrud-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A CLI tool to generate CRUD boilerplate for Go projects.")
        .long_about(
            "gocrud-gen is a command-line tool that automates the creation of \
             repository, service, and controller layers for a new entity.",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("crud")
                .about(
                    "Generates a full CRUD flow (repository, service, controller) \
                     for a new entity.",
                )
                .long_about(
                    "This command automates the creation of boilerplate files for a new entity.\n\
                     You must provide the entity name in PascalCase. For example:\n\n\
                     gocrud-gen crud SbsFee\n\n\
                     Files that already exist are never overwritten.",
                )
                .arg(
                    Arg::new("entity")
                        .value_name("EntityName")
                        .help("Entity name in PascalCase")
                        .required(true)
                        .index(1),
                ),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Directory the generated paths are relative to [default: current directory]")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the generation report as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every generation step to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}

fn run_command(matches: clap::ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("crud", sub_matches)) => cli::commands::crud::handle_crud(sub_matches)?,
        _ => {
            unreachable!("Command parsing should ensure we never reach this");
        }
    }

    Ok(())
}
