use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use maud::html;
use plotly::Plot;
use vecspace::demo::DemoArtifacts;
use vecspace::report::plots::plot_vector_space;
use vecspace::report::{Report, ReportSection};

use crate::input::RunConfig;
use crate::narration;

/// Compute, narrate and render one walkthrough.
pub fn run_demo(params: &RunConfig) -> Result<DemoArtifacts> {
    let artifacts = DemoArtifacts::compute(&params.demo)
        .context("Invalid demo inputs")?;
    log::info!(
        "[VecSpace::Demo] Computed sample matrix with shape {:?}",
        artifacts.sample_matrix.shape()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    narration::narrate_vectors(&artifacts, &mut out)?;
    narration::narrate_spaces(&artifacts, &mut out)?;

    let plot = plot_vector_space(&artifacts, &params.demo.figure);
    if let Some(output_file) = &params.output_file {
        writeln!(out)?;
        writeln!(out, "=== VISUALIZATION (Writing {}) ===", output_file.display())?;
        fs::write(output_file, plot.to_html())
            .with_context(|| format!("Failed to write figure: {:?}", output_file))?;
        log::info!("[VecSpace::Demo] Figure saved to: {:?}", output_file);
    } else if params.show_plot {
        writeln!(out)?;
        writeln!(out, "=== VISUALIZATION (Opening plot window) ===")?;
        plot.show();
    }

    narration::narrate_ml_connections(&mut out)?;
    out.flush()?;

    if let Some(report_file) = &params.report_file {
        write_report(&artifacts, plot, params, report_file)?;
        log::info!("[VecSpace::Demo] Report saved to: {:?}", report_file);
    }

    Ok(artifacts)
}

/// Standalone HTML page with the narration, the figure and the inputs used.
pub fn build_report(artifacts: &DemoArtifacts, plot: Plot, params: &RunConfig) -> Result<Report> {
    let mut report = Report::new(
        "VecSpace",
        env!("CARGO_PKG_VERSION"),
        None,
        "Vectors and R^n Coordinate Spaces",
    );

    /* Section 1: Walkthrough */
    {
        let mut buffer = Vec::new();
        narration::narrate(artifacts, &mut buffer)?;
        let text = String::from_utf8_lossy(&buffer).into_owned();

        let mut walkthrough_section = ReportSection::new("Walkthrough");
        walkthrough_section.add_content(html! {
            pre { (text) }
        });
        report.add_section(walkthrough_section);
    }

    /* Section 2: Figures */
    {
        let mut figure_section = ReportSection::new("Figures");
        figure_section.add_content(html! {
            "Left: v1 and a comparison vector as arrows. Middle: the standard basis of R² and the point "
            (artifacts.point_a.to_string()) " built from it. Right: the sample matrix columns as labelled points."
        });
        figure_section.add_plot(plot);
        report.add_section(figure_section);
    }

    /* Section 3: Configuration */
    {
        let mut config_section = ReportSection::new("Configuration");
        config_section.add_content(html! {
            pre {
                code { (params.demo.to_json_pretty()?) }
            }
        });
        report.add_section(config_section);
    }

    Ok(report)
}

fn write_report(
    artifacts: &DemoArtifacts,
    plot: Plot,
    params: &RunConfig,
    path: &Path,
) -> Result<()> {
    let report = build_report(artifacts, plot, params)?;
    report
        .save_to_file(&path.to_string_lossy())
        .with_context(|| format!("Failed to write report: {:?}", path))
}
