#[cfg(feature = "hydrate")]
pub mod browser;
pub mod common;
pub mod consent;
pub mod cookie_consent;
pub mod demo_form;
pub mod i18n;
pub mod icon;
pub mod language_switcher;
pub mod layout;
pub mod pages;
pub mod site;

pub use consent::{ConsentContext, provide_consent_context, use_consent};
pub use i18n::{I18nContext, provide_i18n_context, use_i18n};
pub use icon::{Icon, icons};
pub use site::{SiteContext, provide_site_context, use_site};
