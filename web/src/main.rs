use dioxus::prelude::*;

use ui::results::ReportState;
use ui::views::ReportPage;

/// Global the generated report page assigns the serialized report to.
#[cfg(target_arch = "wasm32")]
const REPORT_GLOBAL: &str = "__JESTVIEW_REPORT__";

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[jestview] logger unavailable: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppHeader updates this on language selection; keying the page on it
    // remounts every localized string.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    let state = use_hook(|| ReportState::from_json(&embedded_report().unwrap_or_default()));

    rsx! {
        document::Title { "jestview" }
        document::Style { "{ui::THEME_CSS}" }

        div {
            key: "{lang_code()}",
            ReportPage { state }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn embedded_report() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(REPORT_GLOBAL))
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn embedded_report() -> Option<String> {
    None
}
