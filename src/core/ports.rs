//! Narrow capability contracts the core depends on
//!
//! The browser provides durable storage, the address bar, the document root,
//! timers and a few script hooks. The core only sees these traits, so the
//! resolver and the consent manager run unchanged against the web-sys
//! adapters in `ui::browser`, against the headless defaults used during
//! server rendering, and against the test-only in-memory fakes below.

use serde_json::Value;

/// Synchronous, last-write-wins key/value storage scoped to the origin
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Read/replace access to the current URL
pub trait UrlState: Send + Sync {
    fn pathname(&self) -> String;
    fn search(&self) -> String;
    /// Replace the current history entry with `url` (path plus query)
    fn replace(&self, url: &str);
}

/// Document-level language attribute
pub trait DocumentLang: Send + Sync {
    fn set_lang(&self, tag: &str);
}

/// Ordered client language preferences, most preferred first
pub trait LanguagePreferences: Send + Sync {
    fn languages(&self) -> Vec<String>;
}

/// A deferred unit of work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Fire-and-forget timer
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Hooks that pull in third-party instrumentation once consent is given.
///
/// Implementations must tolerate repeated calls.
pub trait ScriptLoader: Send + Sync {
    fn load_analytics(&self);
    fn load_marketing(&self);
}

/// Destination for analytics events
pub trait AnalyticsSink: Send + Sync {
    fn emit(&self, event: &str, params: Value);
}

// ============================================================================
// Headless implementations
// ============================================================================

/// Environment with no browser behind it: every read has no opinion and
/// every write is dropped. Used while rendering on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl KeyValueStore for Headless {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

impl UrlState for Headless {
    fn pathname(&self) -> String {
        "/".to_string()
    }

    fn search(&self) -> String {
        String::new()
    }

    fn replace(&self, _url: &str) {}
}

impl DocumentLang for Headless {
    fn set_lang(&self, _tag: &str) {}
}

impl LanguagePreferences for Headless {
    fn languages(&self) -> Vec<String> {
        Vec::new()
    }
}

impl Scheduler for Headless {
    /// Without timers the task runs right away
    fn schedule(&self, _delay_ms: u32, task: Task) {
        task();
    }
}

impl ScriptLoader for Headless {
    fn load_analytics(&self) {}

    fn load_marketing(&self) {}
}

impl AnalyticsSink for Headless {
    fn emit(&self, _event: &str, _params: Value) {}
}

// ============================================================================
// In-memory fakes
// ============================================================================

#[cfg(test)]
pub use fakes::*;


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_memory_store_records_writes() {
        let store = MemoryStore::with_entries([("a", "1")]);
        assert!(store.ops().is_empty());
        assert_eq!(store.get("a"), Some("1".to_string()));

        store.set("b", "2");
        store.remove("a");

        assert_eq!(store.get("a"), None);
        assert_eq!(
            store.ops(),
            vec![
                StoreOp::Set("b".to_string(), "2".to_string()),
                StoreOp::Remove("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_memory_url_replace_splits_query() {
        let url = MemoryUrl::new("/", "?lang=pt");
        url.replace("/en?ref=ad");
        assert_eq!(url.pathname(), "/en");
        assert_eq!(url.search(), "?ref=ad");
        assert_eq!(url.replacements(), vec!["/en?ref=ad".to_string()]);
    }

    #[test]
    fn test_manual_scheduler_runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (delay, label) in [(50, "b"), (10, "a"), (50, "c")] {
            let order = order.clone();
            scheduler.schedule(delay, Box::new(move || order.lock().unwrap().push(label)));
        }

        scheduler.advance(20);
        assert_eq!(*order.lock().unwrap(), vec!["a"]);
        assert_eq!(scheduler.pending(), 2);

        scheduler.advance(30);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now_ms(), 50);
    }

    #[test]
    fn test_manual_scheduler_runs_nested_tasks() {
        let scheduler = ManualScheduler::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.schedule(
            10,
            Box::new(move || {
                inner_hits.fetch_add(1, Ordering::SeqCst);
                let hits = inner_hits.clone();
                inner_scheduler.schedule(
                    5,
                    Box::new(move || {
                        hits.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );

        scheduler.advance(14);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        scheduler.advance(1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_headless_scheduler_runs_immediately() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        Headless.schedule(150, Box::new(move || {
            h.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
