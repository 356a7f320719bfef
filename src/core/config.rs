//! Site configuration.
//!
//! The server loads it with `Config::from_env()` after calling
//! `dotenvy::dotenv()` and renders it into `<meta>` tags; the hydrated client
//! reads the same values back with `Config::from_meta()`.

/// Inbox receiving demo requests when nothing else is configured
pub const DEFAULT_CONTACT_EMAIL: &str = "info@loyaltify.ca";

/// Canonical site URL when nothing else is configured
pub const DEFAULT_SITE_URL: &str = "https://loyaltify.ca";

/// `<meta name>` carrying the contact email
pub const META_CONTACT_EMAIL: &str = "loyaltify:contact-email";

/// `<meta name>` carrying the analytics measurement id
pub const META_ANALYTICS_ID: &str = "loyaltify:analytics-id";

/// `<meta name>` carrying the canonical site URL
pub const META_SITE_URL: &str = "loyaltify:site-url";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Recipient of the demo request mail link
    /// Example: sales@loyaltify.ca
    pub contact_email: String,

    /// Google Analytics measurement id, loaded only after consent
    /// Example: G-XXXXXXXXXX
    pub analytics_id: Option<String>,

    /// Canonical URL used in SEO tags
    pub site_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            analytics_id: None,
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

/// Treat blank values as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Build from a key lookup, falling back to defaults for missing or
    /// blank values
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, keys: [&str; 3]) -> Self {
        let defaults = Self::default();
        Self {
            contact_email: non_empty(lookup(keys[0])).unwrap_or(defaults.contact_email),
            analytics_id: non_empty(lookup(keys[1])),
            site_url: non_empty(lookup(keys[2]))
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
        }
    }

    /// Load configuration from environment variables
    /// (`CONTACT_EMAIL`, `GA_MEASUREMENT_ID`, `SITE_URL`).
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            ["CONTACT_EMAIL", "GA_MEASUREMENT_ID", "SITE_URL"],
        )
    }

    /// Load configuration from the `<meta>` tags rendered by the server
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(lookup, [META_CONTACT_EMAIL, META_ANALYTICS_ID, META_SITE_URL])
    }

    /// Check if analytics is configured
    pub fn has_analytics(&self) -> bool {
        self.analytics_id.is_some()
    }

    /// `(meta name, value)` pairs the server renders into the page head
    pub fn meta_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (META_CONTACT_EMAIL, self.contact_email.clone()),
            (META_SITE_URL, self.site_url.clone()),
        ];
        if let Some(id) = &self.analytics_id {
            entries.push((META_ANALYTICS_ID, id.clone()));
        }
        entries
    }
}
