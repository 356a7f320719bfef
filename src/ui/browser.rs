//! web-sys implementations of the core ports
//!
//! Every adapter looks the window up on each call and treats a missing API
//! or a thrown exception as "no opinion" (reads) or a dropped write.

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::wasm_bindgen::{JsCast, JsValue};
use leptos::web_sys;
use leptos_router::NavigateOptions;
use serde::Serialize;
use serde_json::Value;

use crate::core::config::Config;
use crate::core::ports::{
    AnalyticsSink, DocumentLang, KeyValueStore, LanguagePreferences, Scheduler, ScriptLoader,
    Task, UrlState,
};

const GTAG_LOADER_ID: &str = "loyaltify-gtag-js";
const GTAG_BOOTSTRAP_ID: &str = "loyaltify-gtag-init";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

type Navigate = Box<dyn Fn(&str, NavigateOptions)>;

/// `window.location` for reads; replacements go through the router so its
/// location signal follows the address bar
#[derive(Clone, Copy)]
pub struct RouterUrl {
    navigate: StoredValue<Navigate, LocalStorage>,
}

impl RouterUrl {
    /// Wrap the router's navigate function; call inside `<Router>`
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        let navigate: Navigate = Box::new(navigate);
        Self {
            navigate: StoredValue::new_local(navigate),
        }
    }
}

impl UrlState for RouterUrl {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace(&self, url: &str) {
        let options = NavigateOptions {
            replace: true,
            scroll: false,
            ..Default::default()
        };
        if self
            .navigate
            .try_with_value(|navigate| navigate(url, options))
            .is_none()
        {
            leptos::logging::warn!("Router gone, address bar not updated");
        }
    }
}

/// `<html lang>`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl DocumentLang for BrowserDocument {
    fn set_lang(&self, tag: &str) {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(html) = document.document_element() {
                    let _ = html.set_attribute("lang", tag);
                }
            }
        }
    }
}

/// `navigator.languages`, falling back to `navigator.language`
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorLanguages;

impl LanguagePreferences for NavigatorLanguages {
    fn languages(&self) -> Vec<String> {
        let Some(window) = web_sys::window() else {
            return Vec::new();
        };
        let navigator = window.navigator();

        let listed: Vec<String> = navigator
            .languages()
            .iter()
            .filter_map(|tag| tag.as_string())
            .collect();

        if !listed.is_empty() {
            return listed;
        }
        navigator.language().into_iter().collect()
    }
}

/// `setTimeout` through gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

/// Read a `<meta name=... content=...>` value from the document head
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Configuration rendered into the page by the server
pub fn config_from_document() -> Config {
    Config::from_meta(meta_content)
}

/// `window.gtag`, if the page has one
fn gtag() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn to_js(params: &Value) -> JsValue {
    params
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}

fn gtag_call(command: &str, target: &str, params: &Value) {
    if let Some(gtag) = gtag() {
        let _ = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str(command),
            &JsValue::from_str(target),
            &to_js(params),
        );
    }
}

/// Sends events through `gtag('event', ...)`; dropped when gtag is absent
#[derive(Clone, Copy, Debug, Default)]
pub struct GtagSink;

impl AnalyticsSink for GtagSink {
    fn emit(&self, event: &str, params: Value) {
        gtag_call("event", event, &params);
    }
}

/// Injects the Google tag after consent and grants the matching consent
/// mode categories. Each category is granted once per page load.
pub struct GtagScripts {
    measurement_id: Option<String>,
    analytics_loaded: AtomicBool,
    marketing_loaded: AtomicBool,
}

impl GtagScripts {
    pub fn new(measurement_id: Option<String>) -> Self {
        Self {
            measurement_id,
            analytics_loaded: AtomicBool::new(false),
            marketing_loaded: AtomicBool::new(false),
        }
    }

    /// Add the gtag bootstrap and loader scripts unless already present
    fn ensure_tag(&self) -> bool {
        let Some(id) = self.measurement_id.as_deref() else {
            leptos::logging::log!("Analytics id not configured, skipping gtag");
            return false;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        if document.get_element_by_id(GTAG_LOADER_ID).is_some() {
            return true;
        }
        let Some(head) = document.head() else {
            return false;
        };

        let bootstrap = format!(
            "window.dataLayer=window.dataLayer||[];\
             function gtag(){{dataLayer.push(arguments);}}\
             gtag('consent','default',{{analytics_storage:'denied',ad_storage:'denied',ad_user_data:'denied',ad_personalization:'denied'}});\
             gtag('js',new Date());gtag('config','{}');",
            id
        );

        let inserted = (|| -> Result<(), JsValue> {
            let init = document.create_element("script")?;
            init.set_id(GTAG_BOOTSTRAP_ID);
            init.set_text_content(Some(&bootstrap));
            head.append_child(&init)?;

            let loader = document
                .create_element("script")?
                .dyn_into::<web_sys::HtmlScriptElement>()?;
            loader.set_id(GTAG_LOADER_ID);
            loader.set_async(true);
            loader.set_src(&format!(
                "https://www.googletagmanager.com/gtag/js?id={}",
                urlencoding::encode(id)
            ));
            head.append_child(&loader)?;
            Ok(())
        })();

        match inserted {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::warn!("Failed to inject gtag: {:?}", e);
                false
            }
        }
    }
}

impl ScriptLoader for GtagScripts {
    fn load_analytics(&self) {
        if self.analytics_loaded.swap(true, Ordering::SeqCst) || !self.ensure_tag() {
            return;
        }
        gtag_call(
            "consent",
            "update",
            &serde_json::json!({ "analytics_storage": "granted" }),
        );
    }

    fn load_marketing(&self) {
        if self.marketing_loaded.swap(true, Ordering::SeqCst) || !self.ensure_tag() {
            return;
        }
        gtag_call(
            "consent",
            "update",
            &serde_json::json!({
                "ad_storage": "granted",
                "ad_user_data": "granted",
                "ad_personalization": "granted"
            }),
        );
    }
}
