//! Localized chrome strings: toolbar, summary, notices and placeholders.
//!
//! Messages live in `i18n/<locale>/jestview-ui.ftl` and are embedded at compile
//! time. `en-US` is the fallback and the reference for key checks. Column
//! titles and status filter labels are not translated.
//!
//! ```ignore
//! ui::i18n::init();
//! let label = ui::t!("summary-started", time = started);
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Looks `key` up through [`LOADER`], with optional fluent arguments.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must agree with `domain` in `i18n.toml` and the `.ftl` file names.
const DOMAIN: &str = "jestview-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Locales;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("en-US")));

static INIT: Once = Once::new();

/// Selects the user's preferred locales once; later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        let preferred = preferred_locales();
        match i18n_embed::select(&*LOADER, &Locales, &preferred) {
            Ok(chosen) => tracing::debug!(?chosen, "selected ui locales"),
            Err(err) => tracing::warn!(%err, "locale selection failed, using en-US"),
        }
    });
}

/// Switches to `tag`. A tag that does not parse leaves the current locale.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(locale) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparsable locale tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Locales, &[locale])?;
    Ok(())
}

/// Locale directories embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut locales: Vec<String> = Locales::iter()
        .filter_map(|path| path.split_once('/').map(|(dir, _)| dir.to_string()))
        .collect();
    locales.sort();
    locales.dedup();
    locales
}

#[cfg(target_arch = "wasm32")]
fn preferred_locales() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn preferred_locales() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let locales = available_languages();
        assert!(locales.iter().any(|l| l == "en-US"));
        assert!(locales.iter().any(|l| l == "zh-CN"));
    }

    #[test]
    fn t_macro_resolves_through_the_loader() {
        set_language("en-US").unwrap();
        assert_eq!(crate::t!("toolbar-expand-all"), "Expand all");
        assert!(crate::t!("copy-failed", reason = "denied").contains("denied"));
    }

    #[test]
    fn invalid_tag_keeps_current_language() {
        init();
        let before = crate::t!("table-empty");
        set_language("not a language tag!").unwrap();
        assert_eq!(crate::t!("table-empty"), before);
    }
}
