//! Report data as written by the reporter: per-file results, per-case results,
//! attachments and the reporter options that shape the table.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::ViewerError;

/// Key under which the reporter stores the attachment list of a file.
pub const FILE_ATTACH_KEY: &str = "jest-html-reporters-file-attach";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfStats {
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub end: i64,
}

impl PerfStats {
    pub fn duration_ms(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }
}

/// Per-case status. Jest emits more than the common five (`focused`, and
/// whatever a custom runner reports), so unrecognised values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    Passed,
    Failed,
    Pending,
    Todo,
    Skipped,
    Disabled,
    Focused,
    Other(String),
}

impl CaseStatus {
    pub fn label(&self) -> &str {
        match self {
            CaseStatus::Passed => "passed",
            CaseStatus::Failed => "failed",
            CaseStatus::Pending => "pending",
            CaseStatus::Todo => "todo",
            CaseStatus::Skipped => "skipped",
            CaseStatus::Disabled => "disabled",
            CaseStatus::Focused => "focused",
            CaseStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for CaseStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "passed" => CaseStatus::Passed,
            "failed" => CaseStatus::Failed,
            "pending" => CaseStatus::Pending,
            "todo" => CaseStatus::Todo,
            "skipped" => CaseStatus::Skipped,
            "disabled" => CaseStatus::Disabled,
            "focused" => CaseStatus::Focused,
            _ => CaseStatus::Other(raw),
        }
    }
}

impl From<CaseStatus> for String {
    fn from(status: CaseStatus) -> Self {
        match status {
            CaseStatus::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

/// One `it`/`test` block inside a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    #[serde(default)]
    pub ancestor_titles: Vec<String>,
    pub title: String,
    #[serde(default)]
    pub full_name: String,
    pub status: CaseStatus,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub failure_messages: Vec<String>,
}

/// Aggregated result of a single test file. `test_file_path` is the row key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFileResult {
    pub test_file_path: String,
    #[serde(default)]
    pub perf_stats: PerfStats,
    #[serde(default)]
    pub num_passing_tests: u32,
    #[serde(default)]
    pub num_failing_tests: u32,
    #[serde(default)]
    pub num_pending_tests: u32,
    #[serde(default)]
    pub num_todo_tests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_exec_error: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    #[serde(default)]
    pub test_results: Vec<CaseResult>,
}

impl TestFileResult {
    /// A `null` exec error in the report counts as absent.
    pub fn has_exec_error(&self) -> bool {
        matches!(&self.test_exec_error, Some(value) if !value.is_null())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_path: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Attachments of one test file. The fixed key holds the file-level list;
/// every other key is a case full name mapping to that case's attachments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileAttachInfo {
    #[serde(
        rename = "jest-html-reporters-file-attach",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(flatten)]
    pub cases: BTreeMap<String, Vec<Attachment>>,
}

/// Attachment info keyed by absolute test file path.
pub type AttachInfos = HashMap<String, FileAttachInfo>;

/// Attachments recorded for exactly `test_file_path`, or an empty list.
pub fn file_attachments(attach_infos: &AttachInfos, test_file_path: &str) -> Vec<Attachment> {
    attach_infos
        .get(test_file_path)
        .and_then(|info| info.attachments.clone())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReporterOptions {
    pub enable_merge_data: bool,
    pub data_merge_level: usize,
    pub test_command: String,
    pub url_for_test_files: Option<String>,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            enable_merge_data: false,
            data_merge_level: 1,
            test_command: "npx jest".to_string(),
            url_for_test_files: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub root_dir: String,
}

/// Everything the viewer is launched with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportData {
    pub num_total_test_suites: u32,
    pub num_passed_test_suites: u32,
    pub num_failed_test_suites: u32,
    pub num_total_tests: u32,
    pub num_passed_tests: u32,
    pub num_failed_tests: u32,
    pub num_pending_tests: u32,
    pub num_todo_tests: u32,
    /// Epoch milliseconds.
    pub start_time: i64,
    pub test_results: Vec<TestFileResult>,
    pub config: ReportConfig,
    #[serde(rename = "_reporterOptions")]
    pub reporter_options: ReporterOptions,
    pub attach_infos: AttachInfos,
}

impl ReportData {
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        if raw.trim().is_empty() {
            return Err(ViewerError::MissingReport);
        }
        let report: ReportData = serde_json::from_str(raw)?;
        tracing::debug!(
            files = report.test_results.len(),
            root_dir = %report.config.root_dir,
            "parsed report data"
        );
        Ok(report)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, ViewerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}
