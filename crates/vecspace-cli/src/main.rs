use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use vecspace_cli::input::RunConfig;
use vecspace_cli::runner;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("VECSPACE_LOG", "error,vecspace=info"))
        .init();

    let matches = Command::new("vecspace")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("\u{1F4D0} Vectors, R^n coordinate spaces, basis vectors and linear combinations")
        .arg(
            Arg::new("config")
                .help("Path to a JSON configuration file with the example vectors")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Write the figure to this HTML file instead of opening it in a browser")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("report_file")
                .long("report")
                .help("Write an HTML report with the walkthrough, figure and configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no_plot")
                .long("no-plot")
                .help("Skip the interactive figure.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let params = RunConfig::from_arguments(&matches)?;

    if matches.get_flag("print_config") {
        println!("{}", params.demo.to_json_pretty()?);
        return Ok(());
    }

    match matches.get_one::<PathBuf>("config") {
        Some(config_path) => log::info!("[VecSpace::Demo] Using config: {:?}", config_path),
        None => log::info!("[VecSpace::Demo] No config provided; using defaults."),
    }

    match runner::run_demo(&params) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Walkthrough failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
