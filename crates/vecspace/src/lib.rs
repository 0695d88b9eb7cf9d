//! vecspace: a small walkthrough of introductory linear algebra.
//!
//! This crate builds example vectors in R^2 and R^3, the standard basis of
//! each space, linear combinations of those bases and a toy sample matrix,
//! then turns them into a three-panel Plotly figure and an HTML report.
//!
//! Every numeric step is a pure function of its inputs; the `demo` module
//! strings them together the same way the command line tool does.
pub mod basis;
pub mod config;
pub mod demo;
pub mod error;
pub mod math;
pub mod report;
