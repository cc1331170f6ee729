use clap::{CommandFactory, Parser};
use std::process;
use traffic_incident_report::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    let Some(command) = args.command else {
        let _ = Args::command().print_help();
        println!();
        process::exit(0);
    };

    if let Err(error) = commands::run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
