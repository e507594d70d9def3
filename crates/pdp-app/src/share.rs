//! Share action: native share sheet with clipboard fallback.
//!
//! The platform capability is checked at runtime. When `navigator.share`
//! exists, the native sheet is invoked with title/text/url derived from
//! the product and the current page location; otherwise the URL is copied
//! to the clipboard and a transient toast confirms it. Both branches are
//! fire-and-forget: a dismissed native sheet is silently ignored, and any
//! other failure surfaces as a non-fatal toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use pdp_core::{format_price, Product};

/// How long the toast stays visible, in milliseconds.
const TOAST_DURATION_MS: u32 = 2500;

/// The payload handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Build a request from a product and the page URL.
    pub fn new(product: &Product, url: impl Into<String>) -> Self {
        Self {
            title: product.name.clone(),
            text: format!(
                "Check out {} for {}",
                product.name,
                format_price(product.price)
            ),
            url: url.into(),
        }
    }
}

/// Share the product from the current page.
pub fn share_product(product: &Product, toast: RwSignal<Option<String>>) {
    let request = ShareRequest::new(product, current_url());
    share(request, toast);
}

/// Dispatch a share request through the available platform capability.
pub fn share(request: ShareRequest, toast: RwSignal<Option<String>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    if supports_native_share(&navigator) {
        let data = web_sys::ShareData::new();
        data.set_title(&request.title);
        data.set_text(&request.text);
        data.set_url(&request.url);
        let promise = navigator.share_with_data(&data);
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                if is_user_cancellation(&err) {
                    return;
                }
                show_toast(toast, "Could not share this product");
            }
        });
    } else {
        let promise = navigator.clipboard().write_text(&request.url);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => show_toast(toast, "Link copied to clipboard"),
                Err(_) => show_toast(toast, "Could not copy the link"),
            }
        });
    }
}

fn supports_native_share(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false)
}

/// Dismissing the native sheet rejects with an AbortError.
fn is_user_cancellation(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "AbortError")
        .unwrap_or(false)
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn show_toast(toast: RwSignal<Option<String>>, message: &str) {
    let _ = toast.try_set(Some(message.to_string()));
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        let _ = toast.try_set(None);
    });
}
