use plotly::common::{Line, Marker, Mode, Position};
use plotly::layout::{Annotation, Axis, GridPattern, Layout, LayoutGrid};
use plotly::{Plot, Scatter};

use crate::config::FigureConfig;
use crate::demo::DemoArtifacts;
use crate::math::Vector;

const POINT_COLORS: [&str; 3] = ["red", "blue", "green"];

/// An arrow from the origin to `tip`, drawn on one subplot.
#[derive(Debug, Clone)]
pub struct Arrow {
    pub tip: (f64, f64),
    pub label: String,
    pub color: &'static str,
    pub width: f64,
}

impl Arrow {
    pub fn new(v: &Vector<f64>, label: impl Into<String>, color: &'static str, width: f64) -> Self {
        Self {
            tip: (v[0], v[1]),
            label: label.into(),
            color,
            width,
        }
    }
}

/// Axis ids for the 1-based subplot `panel`: `("x", "y")`, `("x2", "y2")`, ...
fn axis_ids(panel: usize) -> (String, String) {
    if panel == 1 {
        ("x".to_string(), "y".to_string())
    } else {
        (format!("x{}", panel), format!("y{}", panel))
    }
}

fn subscript(index: usize) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    (index + 1)
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect()
}

/// Draw `arrow` on `panel`, returning the arrowhead annotation.
///
/// The shaft is added as a line trace so the arrow shows up in the legend;
/// the annotation supplies the head.
fn add_arrow(plot: &mut Plot, panel: usize, arrow: &Arrow) -> Annotation {
    let (x_id, y_id) = axis_ids(panel);
    let (x, y) = arrow.tip;

    plot.add_trace(
        Scatter::new(vec![0.0, x], vec![0.0, y])
            .name(&arrow.label)
            .mode(Mode::Lines)
            .line(Line::new().color(arrow.color).width(arrow.width))
            .x_axis(&x_id)
            .y_axis(&y_id),
    );

    Annotation::new()
        .x(x)
        .y(y)
        .ax(0.0)
        .ay(0.0)
        .x_ref(&x_id)
        .y_ref(&y_id)
        .ax_ref(&x_id)
        .ay_ref(&y_id)
        .text("")
        .show_arrow(true)
        .arrow_head(2)
        .arrow_size(1.0)
        .arrow_width(arrow.width)
        .arrow_color(arrow.color)
}

fn panel_title(panel: usize, title: &str) -> Annotation {
    let (x_id, y_id) = axis_ids(panel);
    Annotation::new()
        .text(title)
        .x(0.5)
        .y(1.12)
        .x_ref(&format!("{} domain", x_id))
        .y_ref(&format!("{} domain", y_id))
        .show_arrow(false)
}

fn plane_axis(range: (f64, f64)) -> Axis {
    Axis::new()
        .range(vec![range.0, range.1])
        .show_grid(true)
        .zero_line(true)
}

/// Arrows for the first panel: `v1` against the comparison vector.
pub fn vector_arrows(artifacts: &DemoArtifacts) -> Vec<Arrow> {
    vec![
        Arrow::new(&artifacts.v1, format!("v1 = {}", artifacts.v1), "red", 3.0),
        Arrow::new(
            &artifacts.comparison,
            format!("v2 = {}", artifacts.comparison),
            "blue",
            3.0,
        ),
    ]
}

/// Arrows for the second panel: the R^2 basis and the combined point.
pub fn basis_arrows(artifacts: &DemoArtifacts) -> Vec<Arrow> {
    let colors = ["red", "green"];
    let mut arrows: Vec<Arrow> = artifacts
        .plane_basis
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (e, color))| Arrow::new(e, format!("e{} = {}", subscript(i), e), color, 3.0))
        .collect();

    let terms: Vec<String> = artifacts
        .plane_coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}e{}", c, subscript(i)))
        .collect();
    arrows.push(Arrow::new(
        &artifacts.point_a,
        format!("{} = {}", terms.join(" + "), artifacts.point_a),
        "blue",
        1.5,
    ));
    arrows
}

/// Per-point labels for the sample matrix: `v1`, `v2`, ... in column order.
pub fn sample_labels(ncols: usize) -> Vec<String> {
    (1..=ncols).map(|i| format!("v{}", i)).collect()
}

/// Scatter of the sample matrix columns, one labelled marker per sample.
pub fn sample_scatter(artifacts: &DemoArtifacts, panel: usize) -> Box<Scatter<f64, f64>> {
    let (x_id, y_id) = axis_ids(panel);
    let matrix = artifacts.sample_matrix.to_array2();
    let xs = matrix.row(0).to_vec();
    let ys = matrix.row(1).to_vec();
    let colors: Vec<&'static str> = (0..matrix.ncols())
        .map(|i| POINT_COLORS[i % POINT_COLORS.len()])
        .collect();

    Scatter::new(xs, ys)
        .name("Samples")
        .mode(Mode::MarkersText)
        .text_array(sample_labels(matrix.ncols()))
        .text_position(Position::TopRight)
        .marker(
            Marker::new()
                .size(14)
                .color_array(colors)
                .line(Line::new().color("black").width(2.0)),
        )
        .x_axis(&x_id)
        .y_axis(&y_id)
}

/// The three-panel figure: vectors as arrows, basis plus linear combination,
/// and the sample matrix as labelled points.
pub fn plot_vector_space(artifacts: &DemoArtifacts, figure: &FigureConfig) -> Plot {
    let mut plot = Plot::new();
    let mut annotations = Vec::new();

    for arrow in vector_arrows(artifacts) {
        annotations.push(add_arrow(&mut plot, 1, &arrow));
    }
    annotations.push(panel_title(1, "Vectors as Arrows (R²)"));

    for arrow in basis_arrows(artifacts) {
        annotations.push(add_arrow(&mut plot, 2, &arrow));
    }
    annotations.push(panel_title(2, "Coordinate Space R² (Basis + Linear Combination)"));

    plot.add_trace(sample_scatter(artifacts, 3));
    annotations.push(panel_title(3, "ML Dataset (Points in R²)"));

    let layout = Layout::new()
        .title(figure.title.as_str())
        .width(figure.width)
        .height(figure.height)
        .grid(
            LayoutGrid::new()
                .rows(1)
                .columns(3)
                .pattern(GridPattern::Independent),
        )
        .x_axis(plane_axis((-2.0, 5.0)))
        .y_axis(plane_axis((-2.0, 5.0)).scale_anchor("x"))
        .x_axis2(plane_axis((-1.0, 4.0)))
        .y_axis2(plane_axis((-1.0, 3.0)).scale_anchor("x2"))
        .x_axis3(Axis::new().title("Feature 1").show_grid(true))
        .y_axis3(Axis::new().title("Feature 2").show_grid(true))
        .annotations(annotations);

    plot.set_layout(layout);
    plot
}
