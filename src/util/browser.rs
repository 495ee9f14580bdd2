//! Blocking browser dialogs, centralized so pages skip the web-sys glue.

/// Show a blocking alert dialog. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
