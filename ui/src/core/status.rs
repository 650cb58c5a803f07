//! Status classification for a test file row and the status column's filters.

use super::model::TestFileResult;

pub const COLOR_PASSED: &str = "#52c41a";
pub const COLOR_FAILED: &str = "#cf1322";
pub const COLOR_PENDING: &str = "#faad14";
pub const COLOR_TODO: &str = "#d466d6";

/// The inputs status classification is allowed to look at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounters {
    pub passing: u32,
    pub failing: u32,
    pub pending: u32,
    pub todo: u32,
    pub exec_error: bool,
}

impl From<&TestFileResult> for StatusCounters {
    fn from(row: &TestFileResult) -> Self {
        Self {
            passing: row.num_passing_tests,
            failing: row.num_failing_tests,
            pending: row.num_pending_tests,
            todo: row.num_todo_tests,
            exec_error: row.has_exec_error(),
        }
    }
}

/// What the status cell shows. Zero counts in `Mixed` are `None` and not rendered;
/// the passing count is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    ExecError,
    AllPassed {
        passing: u32,
    },
    Mixed {
        passing: u32,
        failing: Option<u32>,
        pending: Option<u32>,
        todo: Option<u32>,
    },
}

pub fn classify(counters: StatusCounters) -> StatusBadge {
    if counters.exec_error {
        return StatusBadge::ExecError;
    }
    if counters.failing == 0 && counters.pending == 0 {
        return StatusBadge::AllPassed {
            passing: counters.passing,
        };
    }
    StatusBadge::Mixed {
        passing: counters.passing,
        failing: non_zero(counters.failing),
        pending: non_zero(counters.pending),
        todo: non_zero(counters.todo),
    }
}

fn non_zero(count: u32) -> Option<u32> {
    (count > 0).then_some(count)
}

/// Single-select filter values offered by the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusFilter {
    Passed,
    Failed,
    Pending,
    Todo,
    NotPassed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 5] = [
        StatusFilter::Passed,
        StatusFilter::Failed,
        StatusFilter::Pending,
        StatusFilter::Todo,
        StatusFilter::NotPassed,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            StatusFilter::Passed => "Passed",
            StatusFilter::Failed => "Failed",
            StatusFilter::Pending => "Pending",
            StatusFilter::Todo => "Todo",
            StatusFilter::NotPassed => "Not Passed",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::Passed => "passed",
            StatusFilter::Failed => "failed",
            StatusFilter::Pending => "pending",
            StatusFilter::Todo => "todo",
            StatusFilter::NotPassed => "noPass",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.value() == value)
    }

    /// "Not Passed" overlaps "Failed" and "Pending".
    pub fn matches(&self, counters: StatusCounters) -> bool {
        let StatusCounters {
            failing,
            pending,
            todo,
            exec_error,
            ..
        } = counters;
        match self {
            StatusFilter::Passed => !(exec_error || failing > 0 || pending > 0),
            StatusFilter::Failed => exec_error || failing > 0,
            StatusFilter::Pending => pending > 0,
            StatusFilter::Todo => todo > 0,
            StatusFilter::NotPassed => exec_error || failing > 0 || pending > 0,
        }
    }
}

/// Row class for the table: failing rows first, then pending rows.
pub fn render_root_row_class(row: &TestFileResult) -> Option<&'static str> {
    let counters = StatusCounters::from(row);
    if counters.exec_error || counters.failing > 0 {
        Some("row_fail")
    } else if counters.pending > 0 {
        Some("row_pending")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn counters(passing: u32, failing: u32, pending: u32, todo: u32) -> StatusCounters {
        StatusCounters {
            passing,
            failing,
            pending,
            todo,
            exec_error: false,
        }
    }

    proptest! {
        #[test]
        fn exec_error_always_wins(passing: u32, failing: u32, pending: u32, todo: u32) {
            let mut c = counters(passing, failing, pending, todo);
            c.exec_error = true;
            prop_assert_eq!(classify(c), StatusBadge::ExecError);
        }

        #[test]
        fn clean_rows_show_exact_passing_count(passing: u32, todo: u32) {
            prop_assert_eq!(
                classify(counters(passing, 0, 0, todo)),
                StatusBadge::AllPassed { passing }
            );
        }

        #[test]
        fn passed_and_not_passed_partition_rows(
            failing in 0u32..3,
            pending in 0u32..3,
            todo in 0u32..3,
            exec_error in any::<bool>(),
        ) {
            let mut c = counters(1, failing, pending, todo);
            c.exec_error = exec_error;
            prop_assert_ne!(
                StatusFilter::Passed.matches(c),
                StatusFilter::NotPassed.matches(c)
            );
        }
    }

    #[test]
    fn all_zero_counters_are_all_passed() {
        assert_eq!(
            classify(StatusCounters::default()),
            StatusBadge::AllPassed { passing: 0 }
        );
    }

    #[test]
    fn mixed_badge_hides_zero_counts() {
        assert_eq!(
            classify(counters(3, 1, 0, 2)),
            StatusBadge::Mixed {
                passing: 3,
                failing: Some(1),
                pending: None,
                todo: Some(2),
            }
        );
    }

    #[test]
    fn pending_only_rows_are_mixed() {
        assert_eq!(
            classify(counters(0, 0, 4, 0)),
            StatusBadge::Mixed {
                passing: 0,
                failing: None,
                pending: Some(4),
                todo: None,
            }
        );
    }

    #[test]
    fn exec_error_counts_as_failed_not_passed() {
        let c = StatusCounters {
            exec_error: true,
            ..StatusCounters::default()
        };
        assert!(StatusFilter::Failed.matches(c));
        assert!(StatusFilter::NotPassed.matches(c));
        assert!(!StatusFilter::Passed.matches(c));
        assert!(!StatusFilter::Pending.matches(c));
    }

    #[test]
    fn todo_filter_ignores_other_counters() {
        assert!(StatusFilter::Todo.matches(counters(5, 0, 0, 1)));
        assert!(!StatusFilter::Todo.matches(counters(5, 2, 1, 0)));
        // todo alone does not make a row "not passed"
        assert!(StatusFilter::Passed.matches(counters(5, 0, 0, 1)));
    }

    #[test]
    fn filter_values_round_trip() {
        for filter in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_value(filter.value()), Some(filter));
        }
        assert_eq!(StatusFilter::from_value("bogus"), None);
    }

    #[test]
    fn row_class_prefers_failures() {
        let mut row = TestFileResult {
            test_file_path: "/repo/a.test.js".into(),
            num_failing_tests: 1,
            num_pending_tests: 1,
            ..TestFileResult::default()
        };
        assert_eq!(render_root_row_class(&row), Some("row_fail"));

        row.num_failing_tests = 0;
        assert_eq!(render_root_row_class(&row), Some("row_pending"));

        row.num_pending_tests = 0;
        assert_eq!(render_root_row_class(&row), None);
    }
}
