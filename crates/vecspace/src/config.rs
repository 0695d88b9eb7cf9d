use std::path::Path;

use serde::{Deserialize, Serialize};

/// Inputs for one walkthrough run.
///
/// The defaults are the example values used throughout: `v1 = (3, 4)`,
/// `v2 = (-1, 2, 5)`, a comparison arrow `(2, 1)`, and basis coefficients
/// `(3, 2)` for R^2 and `(1, 4, 2)` for R^3.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub v1: Vec<f64>,
    pub v2: Vec<f64>,
    /// Second arrow drawn next to `v1` in the first panel.
    pub comparison: Vec<f64>,
    /// Sample points on the real line R^1.
    pub r1_points: Vec<f64>,
    pub plane_coefficients: Vec<f64>,
    pub space_coefficients: Vec<f64>,
    pub figure: FigureConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            v1: vec![3.0, 4.0],
            v2: vec![-1.0, 2.0, 5.0],
            comparison: vec![2.0, 1.0],
            r1_points: vec![-3.0, -1.0, 0.0, 2.0, 5.0],
            plane_coefficients: vec![3.0, 2.0],
            space_coefficients: vec![1.0, 4.0, 2.0],
            figure: FigureConfig::default(),
        }
    }
}

/// Size and title of the rendered figure, in pixels.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FigureConfig {
    pub width: usize,
    pub height: usize,
    pub title: String,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 500,
            title: "Vectors and Coordinate Spaces".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a JSON config; missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content).map_err(std::io::Error::from)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
