// HTML reports come from the shared `report-builder` package; re-exported
// here so callers keep using `vecspace::report::{Report, ReportSection}`.

pub use report_builder::Report;
pub use report_builder::ReportSection;
