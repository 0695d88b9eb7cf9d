//! Plotting and HTML reporting helpers.
//!
//! `plots` turns computed artifacts into a `plotly::Plot`; `report` wraps
//! plots and markup into a standalone HTML page.
pub mod plots;
pub mod report;

pub use report::{Report, ReportSection};
