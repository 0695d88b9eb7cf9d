//! Human readable walkthrough of the computed artifacts.
use std::io::{self, Write};

use vecspace::demo::DemoArtifacts;

pub fn narrate_vectors<W: Write>(artifacts: &DemoArtifacts, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== 1. VECTOR INTRODUCTION FOR LINEAR ALGEBRA ===")?;
    writeln!(
        out,
        "Vectors = arrows from origin representing position/direction/magnitude"
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{}D Vector v1: {}",
        artifacts.v1.dim(),
        artifacts.v1
    )?;
    writeln!(
        out,
        "{}D Vector v2: {}",
        artifacts.v2.dim(),
        artifacts.v2
    )?;
    writeln!(out, "Magnitude of v1: {:.2}", artifacts.v1_magnitude)?;
    writeln!(out)
}

pub fn narrate_spaces<W: Write>(artifacts: &DemoArtifacts, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== 2. REAL COORDINATE SPACES (R^n) ===")?;
    writeln!(
        out,
        "R^n = n-dimensional space. R^2=plane, R^3=3D space, R^784=embedding space"
    )?;
    writeln!(out)?;
    writeln!(out, "R^1 examples: {}", artifacts.r1_points)?;
    writeln!(
        out,
        "R^{}: Point A = {} = {}",
        artifacts.plane_basis.dim(),
        combination_terms(&artifacts.plane_coefficients),
        artifacts.point_a
    )?;
    writeln!(
        out,
        "R^{}: Point B = {} = {}",
        artifacts.space_basis.dim(),
        combination_terms(&artifacts.space_coefficients),
        artifacts.point_b
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Dataset matrix ({} samples in R^{}):",
        artifacts.sample_matrix.ncols(),
        artifacts.sample_matrix.nrows()
    )?;
    writeln!(out, "{}", artifacts.sample_matrix)
}

pub fn narrate_ml_connections<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== ML CONNECTIONS ===")?;
    writeln!(out, "1. Every neural net input = vector in R^n")?;
    writeln!(out, "2. Every neural net weight = matrix (transforms R^n -> R^m)")?;
    writeln!(out, "3. Dataset = matrix where columns = vectors in R^n")?;
    writeln!(out, "4. Forward pass = matrix multiplication: y = W @ x")
}

/// Full narration in program order, minus the visualization banner.
pub fn narrate<W: Write>(artifacts: &DemoArtifacts, out: &mut W) -> io::Result<()> {
    narrate_vectors(artifacts, out)?;
    narrate_spaces(artifacts, out)?;
    narrate_ml_connections(out)
}

/// `"3*e1 + 2*e2"` for coefficients `[3, 2]`.
pub fn combination_terms(coefficients: &[f64]) -> String {
    coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}*e{}", c, i + 1))
        .collect::<Vec<_>>()
        .join(" + ")
}
