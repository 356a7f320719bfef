//! Framework-free site logic: locale resolution, cookie consent,
//! translations, the demo request form and analytics events

pub mod analytics;
pub mod config;
pub mod consent;
pub mod demo_request;
pub mod locale;
pub mod locale_resolver;
pub mod observable;
pub mod ports;
pub mod translations;

pub use analytics::AnalyticsTracker;
pub use config::Config;
pub use consent::{ConsentManager, ConsentStatus, CookiePreferences};
pub use demo_request::{DemoField, DemoFieldError, DemoRequest, DemoRequestErrors, DemoRequestForm};
pub use locale::Locale;
pub use locale_resolver::{LocalePorts, LocaleResolver};
pub use observable::Observable;
