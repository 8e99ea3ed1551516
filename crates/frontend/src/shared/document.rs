/// Sets `document.title`. Outside a browser (no window or document) only logs a warning.
pub fn set_document_title(title: &str) {
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document.set_title(title),
        None => log::warn!("document is not available, title not set"),
    }
}
