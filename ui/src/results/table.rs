use dioxus::prelude::*;

use crate::{
    core::{
        columns::{build_columns, Cell, ColumnSpec},
        expand::{exist_keys, toggle_event, ExpandState, GlobalExpand, ToggleExpand},
        model::{AttachInfos, FileAttachInfo, ReporterOptions, TestFileResult},
        status::render_root_row_class,
        table::{visible_rows, SortOrder, TableState},
    },
    results::{Notice, ResultRow},
    t,
};

/// Results table over all test files. Expansion is owned by the caller:
/// `expand_state` and `global_expand_state` are read, and every expander
/// click is reported once through `on_toggle_expand`.
#[component]
pub fn ResultsTable(
    reporter_options: ReporterOptions,
    test_results: Vec<TestFileResult>,
    root_dir: String,
    expand_state: ExpandState,
    global_expand_state: GlobalExpand,
    on_toggle_expand: EventHandler<ToggleExpand>,
    attach_infos: AttachInfos,
    notice: Signal<Option<Notice>>,
) -> Element {
    let table_state = use_signal(TableState::default);

    let columns = build_columns(
        &root_dir,
        &reporter_options.test_command,
        reporter_options.url_for_test_files.as_deref(),
        &attach_infos,
    );
    let expanded_keys = exist_keys(&expand_state, global_expand_state, &test_results);

    let state = table_state();
    let rows: Vec<RowModel> = visible_rows(&columns, &test_results, &state)
        .into_iter()
        .map(|row| RowModel {
            key: row.test_file_path.clone(),
            cells: columns.iter().map(|column| (column.render)(row)).collect(),
            row_class: render_root_row_class(row).unwrap_or_default().to_string(),
            expanded: expanded_keys.contains(&row.test_file_path),
            attach_info: attach_infos
                .get(&row.test_file_path)
                .cloned()
                .unwrap_or_default(),
            row: row.clone(),
        })
        .collect();

    let empty_label = if test_results.is_empty() {
        t!("report-empty")
    } else {
        t!("table-empty")
    };

    rsx! {
        div { class: "results-table",
            table { class: "results-table__table",
                thead {
                    tr {
                        th { class: "results-table__expander" }
                        for column in columns.iter() {
                            {render_header(column, table_state)}
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "results-table__empty", colspan: "{columns.len() + 1}",
                                "{empty_label}"
                            }
                        }
                    }
                    for model in rows.into_iter() {
                        ResultRow {
                            key: "{model.key}",
                            row_class: model.row_class,
                            cells: model.cells,
                            expanded: model.expanded,
                            on_expand: {
                                let expanded_keys = expanded_keys.clone();
                                move |key: String| on_toggle_expand.call(toggle_event(&expanded_keys, &key))
                            },
                            attach_info: model.attach_info,
                            merge_default: reporter_options.enable_merge_data,
                            merge_level: reporter_options.data_merge_level,
                            notice,
                            row: model.row,
                        }
                    }
                }
            }
        }
    }
}

struct RowModel {
    key: String,
    row: TestFileResult,
    cells: Vec<Cell>,
    row_class: String,
    expanded: bool,
    attach_info: FileAttachInfo,
}

fn render_header(column: &ColumnSpec, mut table_state: Signal<TableState>) -> Element {
    let key = column.key;
    let style = column
        .width
        .map(|width| format!("width: {width}"))
        .unwrap_or_default();

    let sortable = column.sorter.is_some();
    let indicator = match table_state.read().sort_order(key) {
        Some(SortOrder::Ascend) => "▲",
        Some(SortOrder::Descend) => "▼",
        None => "↕",
    };

    let choices = column
        .filter
        .as_ref()
        .map(|filter| filter.options.clone())
        .unwrap_or_default();
    let options = choices.clone();
    let selected = table_state.read().filter_value(key).unwrap_or_default();

    rsx! {
        th { class: "results-table__header", style: "{style}",
            span { class: "results-table__title", "{column.title}" }
            if sortable {
                button {
                    r#type: "button",
                    class: "results-table__sorter",
                    title: t!("table-sort-hint"),
                    onclick: move |_| table_state.write().cycle_sort(key),
                    "{indicator}"
                }
            }
            if !choices.is_empty() {
                select {
                    class: "results-table__filter",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| {
                        let picked = evt.value();
                        let mut state = table_state.write();
                        match options.iter().find(|choice| choice.value == picked) {
                            Some(choice) => state.select_filter(key, choice.value),
                            None => state.reset_filter(key),
                        }
                    },
                    option { value: "", {t!("table-filter-all")} }
                    for choice in choices.iter() {
                        option {
                            key: "{choice.value}",
                            value: "{choice.value}",
                            selected: choice.value == selected,
                            "{choice.text}"
                        }
                    }
                }
            }
        }
    }
}
