//! Tests for the three-panel figure and the HTML report.

use maud::html;

use vecspace::config::{DemoConfig, FigureConfig};
use vecspace::demo::DemoArtifacts;
use vecspace::report::plots::{basis_arrows, plot_vector_space, sample_labels, vector_arrows};
use vecspace::report::{Report, ReportSection};

fn artifacts() -> DemoArtifacts {
    DemoArtifacts::compute(&DemoConfig::default()).unwrap()
}

#[test]
fn vector_panel_arrows() {
    let arrows = vector_arrows(&artifacts());
    assert_eq!(arrows.len(), 2);
    assert_eq!(arrows[0].tip, (3.0, 4.0));
    assert_eq!(arrows[0].label, "v1 = [3, 4]");
    assert_eq!(arrows[1].tip, (2.0, 1.0));
    assert_eq!(arrows[1].label, "v2 = [2, 1]");
}

#[test]
fn basis_panel_arrows() {
    let arrows = basis_arrows(&artifacts());
    let tips: Vec<(f64, f64)> = arrows.iter().map(|a| a.tip).collect();
    assert_eq!(tips, vec![(1.0, 0.0), (0.0, 1.0), (3.0, 2.0)]);
    assert_eq!(arrows[0].label, "e₁ = [1, 0]");
    assert_eq!(arrows[2].label, "3e₁ + 2e₂ = [3, 2]");
}

#[test]
fn sample_labels_follow_column_order() {
    assert_eq!(sample_labels(3), vec!["v1", "v2", "v3"]);
}

#[test]
fn figure_contains_three_panels() {
    let plot = plot_vector_space(&artifacts(), &FigureConfig::default());
    let json = plot.to_json();
    assert!(json.contains("\"x3\""));
    assert!(json.contains("\"y3\""));
    assert!(json.contains("Feature 1"));
    assert!(json.contains("ML Dataset"));
    assert!(json.contains("\"v3\""));
    assert!(json.contains("arrowhead"));
}

#[test]
fn figure_does_not_alter_artifacts() {
    let before = artifacts();
    let after = before.clone();
    let _ = plot_vector_space(&after, &FigureConfig::default());
    assert_eq!(before, after);
}

#[test]
fn report_saves_sections_and_plot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let mut report = Report::new("VecSpace", "0.1.0", None, "Vector Space Walkthrough");
    let mut section = ReportSection::new("Figures");
    section.add_content(html! { p { "Three panels." } });
    section.add_plot(plot_vector_space(&artifacts(), &FigureConfig::default()));
    report.add_section(section);
    report.save_to_file(path.to_str().unwrap()).unwrap();

    let page = std::fs::read_to_string(&path).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Vector Space Walkthrough</title>"));
    assert!(page.contains("<h2>Figures</h2>"));
    assert!(page.contains("Three panels."));
    assert!(page.contains("ML Dataset"));
}
