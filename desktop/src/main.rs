#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use ui::core::{model::ReportData, ViewerError};
use ui::results::ReportState;
use ui::views::ReportPage;

/// Environment variable consulted when no path is given on the command line.
const REPORT_ENV: &str = "JESTVIEW_REPORT";

static REPORT: OnceCell<ReportState> = OnceCell::new();

#[cfg(feature = "desktop")]
fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[jestview] logger unavailable: {err}");
    }

    let path = report_path(std::env::args().nth(1), std::env::var(REPORT_ENV).ok());
    let state = ReportState::from_result(load_report(path.as_ref()));
    let title = match &path {
        Some(path) => format!("jestview – {}", path.display()),
        None => "jestview".to_string(),
    };
    let _ = REPORT.set(state);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

/// CLI argument first, then the environment.
fn report_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
    arg.or(env)
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from)
}

fn load_report(path: Option<&PathBuf>) -> Result<ReportData, ViewerError> {
    let path = path.ok_or(ViewerError::MissingReport)?;
    tracing::info!(path = %path.display(), "loading report");
    ReportData::from_path(path)
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    let state = REPORT.get().cloned().unwrap_or_default();

    rsx! {
        document::Style { "{ui::THEME_CSS}" }

        // Keyed on the language so a switch remounts every localized string.
        div {
            key: "{lang_code()}",
            ReportPage { state }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins_over_environment() {
        assert_eq!(
            report_path(Some("a.json".into()), Some("b.json".into())),
            Some(PathBuf::from("a.json"))
        );
        assert_eq!(
            report_path(None, Some("b.json".into())),
            Some(PathBuf::from("b.json"))
        );
        assert_eq!(report_path(Some("  ".into()), None), None);
    }

    #[test]
    fn missing_path_is_reported() {
        assert!(matches!(load_report(None), Err(ViewerError::MissingReport)));
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let path = PathBuf::from("/definitely/not/here/report.json");
        let err = load_report(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/report.json"));
    }
}
