//! Clipboard writes for the copy-command icon.

use super::ViewerError;

pub async fn copy_to_clipboard(payload: String) -> Result<(), ViewerError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ViewerError::Clipboard(what.to_string());

        let window = web_sys::window().ok_or_else(|| unavailable("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| unavailable("document unavailable"))?;
        let body = document.body().ok_or_else(|| unavailable("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if !copied {
            return Err(unavailable("copy blocked by the browser"));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ViewerError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ViewerError::Clipboard(err.to_string()))
    }
}
