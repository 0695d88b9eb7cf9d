//! The numeric pipeline behind the walkthrough.
//!
//! Builds the example vectors, their magnitude, the standard bases of R^2
//! and R^3, two linear combinations of those bases, and the sample matrix
//! that stacks the 2D views of these vectors as columns.
use serde::Serialize;

use crate::basis::BasisSet;
use crate::config::DemoConfig;
use crate::error::DimensionError;
use crate::math::{SampleMatrix, Vector};

/// Dimension of everything that gets drawn.
pub const PLANE_DIM: usize = 2;

/// Every value the walkthrough prints or plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoArtifacts {
    pub v1: Vector<f64>,
    pub v2: Vector<f64>,
    pub comparison: Vector<f64>,
    pub r1_points: Vector<f64>,
    pub v1_magnitude: f64,
    pub plane_basis: BasisSet<f64>,
    pub plane_coefficients: Vec<f64>,
    pub point_a: Vector<f64>,
    pub space_basis: BasisSet<f64>,
    pub space_coefficients: Vec<f64>,
    pub point_b: Vector<f64>,
    pub sample_matrix: SampleMatrix<f64>,
}

/// Euclidean norm of `v`.
pub fn magnitude(v: &Vector<f64>) -> f64 {
    v.norm()
}

/// First two coordinates of `v`, used to place higher dimensional vectors
/// on the plotting plane. Extra coordinates are dropped, not projected.
pub fn project_to_plane(v: &Vector<f64>) -> Result<Vector<f64>, DimensionError> {
    v.truncate(PLANE_DIM)
}

/// Columns `[v1, point_a[:2], point_b[:2]]`, in that order.
pub fn assemble_sample_matrix(
    v1: &Vector<f64>,
    point_a: &Vector<f64>,
    point_b: &Vector<f64>,
) -> Result<SampleMatrix<f64>, DimensionError> {
    let columns = [
        project_to_plane(v1)?,
        project_to_plane(point_a)?,
        project_to_plane(point_b)?,
    ];
    SampleMatrix::from_columns(&columns)
}

fn require_dim(v: &Vector<f64>, index: usize, dim: usize) -> Result<(), DimensionError> {
    if v.dim() != dim {
        return Err(DimensionError::Mismatch {
            index,
            expected: dim,
            found: v.dim(),
        });
    }
    Ok(())
}

impl DemoArtifacts {
    pub fn compute(config: &DemoConfig) -> Result<Self, DimensionError> {
        let v1 = Vector::from_vec(config.v1.clone());
        let v2 = Vector::from_vec(config.v2.clone());
        let comparison = Vector::from_vec(config.comparison.clone());
        require_dim(&v1, 0, PLANE_DIM)?;
        require_dim(&comparison, 1, PLANE_DIM)?;
        log::debug!("v1 = {}, v2 = {}, comparison = {}", v1, v2, comparison);

        let v1_magnitude = magnitude(&v1);
        log::debug!("|v1| = {}", v1_magnitude);

        let plane_basis = BasisSet::standard(config.plane_coefficients.len());
        if plane_basis.dim() != PLANE_DIM {
            return Err(DimensionError::CoefficientCount {
                vectors: PLANE_DIM,
                coefficients: plane_basis.dim(),
            });
        }
        let point_a = plane_basis.combine(&config.plane_coefficients)?;
        log::debug!("point_a = {}", point_a);

        let space_basis = BasisSet::standard(config.space_coefficients.len());
        let point_b = space_basis.combine(&config.space_coefficients)?;
        log::debug!("point_b = {}", point_b);

        let sample_matrix = assemble_sample_matrix(&v1, &point_a, &point_b)?;
        log::debug!("sample matrix shape = {:?}", sample_matrix.shape());

        Ok(Self {
            v1,
            v2,
            comparison,
            r1_points: Vector::from_vec(config.r1_points.clone()),
            v1_magnitude,
            plane_basis,
            plane_coefficients: config.plane_coefficients.clone(),
            point_a,
            space_basis,
            space_coefficients: config.space_coefficients.clone(),
            point_b,
            sample_matrix,
        })
    }
}
