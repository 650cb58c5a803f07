mod report;
pub use report::{ReportPage, ReportView};
