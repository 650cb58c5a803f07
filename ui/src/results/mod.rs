mod table;
pub use table::ResultsTable;

mod row;
use row::ResultRow;

mod cells;

mod status_tags;
pub use status_tags::StatusTags;

mod error_button;
pub use error_button::ErrorButton;

mod detail_table;
pub use detail_table::DetailTable;

mod notice;
pub use notice::{notify, Notice, NoticeKind, NoticeToast};

use crate::core::{model::ReportData, ViewerError};

/// Report handed to the view by a launcher, or the reason it couldn't be loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub report: Option<ReportData>,
    pub error: Option<String>,
}

impl ReportState {
    pub fn from_result(result: Result<ReportData, ViewerError>) -> Self {
        match result {
            Ok(report) => {
                tracing::info!(files = report.test_results.len(), "report loaded");
                Self {
                    report: Some(report),
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "report unavailable");
                Self {
                    report: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    pub fn from_json(raw: &str) -> Self {
        Self::from_result(ReportData::from_json(raw))
    }
}
