use dioxus::prelude::*;

use crate::{
    core::{columns::Cell, detail::annotate, model::FileAttachInfo, model::TestFileResult},
    results::{cells::render_cell, DetailTable, Notice},
    t,
};

/// One file row plus, when expanded, its nested case table.
#[component]
pub(super) fn ResultRow(
    row: TestFileResult,
    cells: Vec<Cell>,
    row_class: String,
    expanded: bool,
    on_expand: EventHandler<String>,
    attach_info: FileAttachInfo,
    merge_default: bool,
    merge_level: usize,
    notice: Signal<Option<Notice>>,
) -> Element {
    let key = row.test_file_path.clone();
    let column_count = cells.len() + 1;
    let (marker, expander_title) = if expanded {
        ("−", t!("table-collapse-row"))
    } else {
        ("+", t!("table-expand-row"))
    };

    rsx! {
        tr { class: "results-table__row {row_class}",
            td { class: "results-table__expander",
                button {
                    r#type: "button",
                    class: "expander",
                    aria_expanded: "{expanded}",
                    title: "{expander_title}",
                    onclick: move |_| on_expand.call(key.clone()),
                    "{marker}"
                }
            }
            for cell in cells.into_iter() {
                td { class: "results-table__cell", {render_cell(cell, notice)} }
            }
        }
        if expanded {
            tr { class: "results-table__expanded-row",
                td { colspan: "{column_count}",
                    DetailTable {
                        data: annotate(&row.test_results, Some(&attach_info)),
                        default_merge: merge_default,
                        default_merge_level: merge_level,
                    }
                }
            }
        }
    }
}
