//! Modal presenting a freshly created share link.

use leptos::prelude::*;

/// Share-link modal: the server-issued URL verbatim in a read-only field,
/// with a clipboard copy button. The link expires server-side after 24 hours.
#[component]
pub fn ShareModal(share_url: String, on_close: Callback<()>) -> impl IntoView {
    let url_for_copy = share_url.clone();
    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            let url = url_for_copy.clone();
            leptos::task::spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let promise = window.navigator().clipboard().write_text(&url);
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                    let _ = window.alert_with_message("Share link copied to clipboard!");
                } else {
                    log::error!("clipboard write failed");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &url_for_copy;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--share" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h3>"Share Conversation"</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <p class="dialog__hint">
                    "Share this conversation with others. The link will expire in 24 hours."
                </p>
                <div class="dialog__share-row">
                    <input class="dialog__input" type="text" readonly prop:value=share_url/>
                    <button class="btn btn--primary" on:click=on_copy>
                        "Copy"
                    </button>
                </div>
            </div>
        </div>
    }
}
