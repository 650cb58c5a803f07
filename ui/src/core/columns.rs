//! Column descriptors for the results table.
//!
//! Each column is plain data plus pure functions of a row, so the table
//! engine and the Dioxus view can stay agnostic of what a column shows.

use std::{cmp::Ordering, rc::Rc};

use super::{
    format::format_time_display,
    model::{file_attachments, AttachInfos, Attachment, TestFileResult},
    status::{classify, StatusBadge, StatusCounters, StatusFilter},
};

pub const KEY_FILE: &str = "name";
pub const KEY_EXEC_TIME: &str = "ExecTime";
pub const KEY_STATUS: &str = "status";
pub const KEY_ACTION: &str = "operation";

#[derive(Debug, Clone, PartialEq)]
pub struct FileCell {
    pub full_path: String,
    pub relative_path: String,
    /// Text placed on the clipboard by the copy icon.
    pub copy_command: String,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionCell {
    pub failure_message: Option<String>,
    pub relative_path: String,
    pub attachments: Vec<Attachment>,
}

/// Displayable content of one table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    File(FileCell),
    Text(String),
    Status(StatusBadge),
    Action(ActionCell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub text: &'static str,
    pub value: &'static str,
}

pub type RenderFn = Rc<dyn Fn(&TestFileResult) -> Cell>;
pub type SortFn = fn(&TestFileResult, &TestFileResult) -> Ordering;
pub type FilterFn = fn(&str, &TestFileResult) -> bool;

#[derive(Clone)]
pub struct ColumnFilter {
    pub options: Vec<FilterOption>,
    /// When false, picking a value replaces the previous selection.
    pub multiple: bool,
    pub predicate: FilterFn,
}

#[derive(Clone)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub key: &'static str,
    pub width: Option<&'static str>,
    pub render: RenderFn,
    pub sorter: Option<SortFn>,
    pub filter: Option<ColumnFilter>,
}

impl std::fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("title", &self.title)
            .field("key", &self.key)
            .field("width", &self.width)
            .field("sortable", &self.sorter.is_some())
            .field("filterable", &self.filter.is_some())
            .finish()
    }
}

/// `test_file_path` without the exact `root_dir` prefix.
pub fn relative_path(root_dir: &str, test_file_path: &str) -> String {
    test_file_path
        .strip_prefix(root_dir)
        .unwrap_or(test_file_path)
        .to_string()
}

pub fn copy_command(exec_command: &str, relative_path: &str) -> String {
    format!("{exec_command} .{relative_path}")
}

pub fn build_columns(
    root_dir: &str,
    exec_command: &str,
    url_for_test_files: Option<&str>,
    attach_infos: &AttachInfos,
) -> Vec<ColumnSpec> {
    vec![
        file_column(root_dir, exec_command, url_for_test_files),
        exec_time_column(),
        status_column(),
        action_column(root_dir, attach_infos),
    ]
}

fn file_column(root_dir: &str, exec_command: &str, url_for_test_files: Option<&str>) -> ColumnSpec {
    let root_dir = root_dir.to_string();
    let exec_command = exec_command.to_string();
    let url_base = url_for_test_files.map(str::to_string);

    ColumnSpec {
        title: "File",
        key: KEY_FILE,
        width: None,
        render: Rc::new(move |row| {
            let relative_path = relative_path(&root_dir, &row.test_file_path);
            Cell::File(FileCell {
                full_path: row.test_file_path.clone(),
                copy_command: copy_command(&exec_command, &relative_path),
                file_url: url_base
                    .as_ref()
                    .map(|base| format!("{base}/{relative_path}")),
                relative_path,
            })
        }),
        sorter: None,
        filter: None,
    }
}

fn exec_time_column() -> ColumnSpec {
    ColumnSpec {
        title: "ExecTime",
        key: KEY_EXEC_TIME,
        width: Some("150px"),
        render: Rc::new(|row| {
            Cell::Text(format_time_display(row.perf_stats.start, row.perf_stats.end))
        }),
        sorter: Some(compare_duration),
        filter: None,
    }
}

fn compare_duration(a: &TestFileResult, b: &TestFileResult) -> Ordering {
    a.perf_stats.duration_ms().cmp(&b.perf_stats.duration_ms())
}

fn status_column() -> ColumnSpec {
    ColumnSpec {
        title: "Status",
        key: KEY_STATUS,
        width: Some("150px"),
        render: Rc::new(|row| Cell::Status(classify(StatusCounters::from(row)))),
        sorter: None,
        filter: Some(ColumnFilter {
            options: StatusFilter::ALL
                .iter()
                .map(|filter| FilterOption {
                    text: filter.text(),
                    value: filter.value(),
                })
                .collect(),
            multiple: false,
            predicate: status_matches,
        }),
    }
}

fn status_matches(value: &str, row: &TestFileResult) -> bool {
    StatusFilter::from_value(value)
        .map(|filter| filter.matches(StatusCounters::from(row)))
        .unwrap_or(false)
}

fn action_column(root_dir: &str, attach_infos: &AttachInfos) -> ColumnSpec {
    let root_dir = root_dir.to_string();
    let attach_infos = attach_infos.clone();

    ColumnSpec {
        title: "Action",
        key: KEY_ACTION,
        width: Some("100px"),
        render: Rc::new(move |row| {
            Cell::Action(ActionCell {
                failure_message: row.failure_message.clone(),
                relative_path: relative_path(&root_dir, &row.test_file_path),
                attachments: file_attachments(&attach_infos, &row.test_file_path),
            })
        }),
        sorter: None,
        filter: None,
    }
}
