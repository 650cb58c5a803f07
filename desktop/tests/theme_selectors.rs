#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`).
//! These checks fail early if a selector the results table relies on is
//! renamed or dropped from the theme.

const THEME_CSS: &str = ui::THEME_CSS;

/// Selectors used by the report page, the results table and its cells.
const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    // header & toolbar
    ".app-header__brand-mark",
    ".app-header__locale",
    ".report__summary",
    ".report__toolbar",
    ".report-error",
    ".button--ghost",
    ".button--danger",
    // table
    ".results-table__header",
    ".results-table__sorter",
    ".results-table__filter",
    ".results-table__cell",
    ".results-table__expanded-row",
    ".results-table__empty",
    ".row_fail",
    ".row_pending",
    // cells
    ".file-cell__copy",
    ".file-cell__path",
    ".file-cell__link",
    ".status-tags",
    ".status-tag--single",
    ".error-panel__message",
    // nested cases
    ".detail-table__group",
    ".detail-table__case--failed",
    // notifications
    ".notice--success",
    ".notice--error",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors in the shared theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn status_colors_match_tag_palette() {
    use ui::core::status::{COLOR_FAILED, COLOR_PASSED, COLOR_PENDING, COLOR_TODO};

    for color in [COLOR_PASSED, COLOR_FAILED, COLOR_PENDING, COLOR_TODO] {
        assert!(
            THEME_CSS.contains(color),
            "theme palette is missing status color {color}"
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
