//! Small vector and matrix containers used throughout the crate.
//!
//! `Vector` is an immutable, fixed-dimension sequence of components and
//! `SampleMatrix` stores equal-dimension vectors as ordered columns.
pub mod matrix;
pub mod vector;

pub use matrix::SampleMatrix;
pub use vector::Vector;
