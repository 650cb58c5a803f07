use dioxus::prelude::*;

use crate::{
    components::AppHeader,
    core::{
        expand::{ExpandState, GlobalExpand, ToggleExpand},
        format::format_start_time,
        model::ReportData,
    },
    results::{Notice, NoticeToast, ReportState, ResultsTable},
    t,
};

/// Page shown by every launcher: an error banner, or the report.
#[component]
pub fn ReportPage(state: ReportState) -> Element {
    let root_dir = state
        .report
        .as_ref()
        .map(|report| report.config.root_dir.clone())
        .unwrap_or_default();

    rsx! {
        AppHeader { root_dir }
        section { class: "page page-report",
            if let Some(error) = state.error.as_ref() {
                div { class: "report-error", role: "alert",
                    {t!("report-load-error", reason = error.clone())}
                }
            }
            if let Some(report) = state.report.clone() {
                ReportView { report }
            }
        }
    }
}

/// Owns the expansion state of the table and the notification slot.
#[component]
pub fn ReportView(report: ReportData) -> Element {
    let mut expand_state = use_signal(ExpandState::default);
    let mut global_expand = use_signal(GlobalExpand::default);
    let notice = use_signal(|| None::<Notice>);

    let suites = t!(
        "summary-suites",
        total = report.num_total_test_suites,
        passed = report.num_passed_test_suites,
        failed = report.num_failed_test_suites
    );
    let tests = t!(
        "summary-tests",
        total = report.num_total_tests,
        passed = report.num_passed_tests,
        failed = report.num_failed_tests,
        pending = report.num_pending_tests,
        todo = report.num_todo_tests
    );
    let started = t!("summary-started", time = format_start_time(report.start_time));

    rsx! {
        div { class: "report__header",
            div { class: "report__summary",
                span { class: "report__summary-item", "{suites}" }
                span { class: "report__summary-item", "{tests}" }
                span { class: "report__summary-item report__summary-item--muted", "{started}" }
            }
            div { class: "report__toolbar",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| {
                        expand_state.write().clear();
                        global_expand.set(GlobalExpand::All);
                    },
                    {t!("toolbar-expand-all")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| {
                        expand_state.write().clear();
                        global_expand.set(GlobalExpand::PerRow);
                    },
                    {t!("toolbar-collapse-all")}
                }
            }
        }

        ResultsTable {
            reporter_options: report.reporter_options.clone(),
            test_results: report.test_results.clone(),
            root_dir: report.config.root_dir.clone(),
            expand_state: expand_state(),
            global_expand_state: global_expand(),
            on_toggle_expand: move |event: ToggleExpand| expand_state.write().apply(event),
            attach_infos: report.attach_infos.clone(),
            notice,
        }

        NoticeToast { notice }
    }
}
