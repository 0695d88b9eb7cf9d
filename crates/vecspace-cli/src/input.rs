use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use vecspace::config::DemoConfig;

/// Everything one invocation of `vecspace` needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub demo: DemoConfig,
    /// Write the figure here instead of opening it in a browser.
    pub output_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub show_plot: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            demo: DemoConfig::default(),
            output_file: None,
            report_file: None,
            show_plot: true,
        }
    }
}

impl RunConfig {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = RunConfig::default();

        if let Some(config_path) = matches.get_one::<PathBuf>("config") {
            config.demo = DemoConfig::from_file(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        }

        if let Some(output_file) = matches.get_one::<PathBuf>("output_file") {
            validate_html_path(output_file)?;
            config.output_file = Some(output_file.clone());
        }

        if let Some(report_file) = matches.get_one::<PathBuf>("report_file") {
            validate_html_path(report_file)?;
            config.report_file = Some(report_file.clone());
        }

        // Writing the figure to a file replaces the interactive window.
        config.show_plot = !matches.get_flag("no_plot") && config.output_file.is_none();

        Ok(config)
    }
}

pub fn validate_html_path(path: &PathBuf) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => Ok(()),
        _ => anyhow::bail!("Output file must have a .html extension: {:?}", path),
    }
}
