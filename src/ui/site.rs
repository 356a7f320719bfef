//! Site-wide configuration and analytics handles

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::analytics::AnalyticsTracker;
use crate::core::config::Config;
use crate::core::ports::AnalyticsSink;

/// Site context
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<Config>,
    pub tracker: StoredValue<AnalyticsTracker>,
}

impl SiteContext {
    pub fn contact_email(&self) -> String {
        self.config.with_value(|config| config.contact_email.clone())
    }
}

/// Config as seen by the current side: the server gets it from the request
/// context, the browser from the `<meta>` tags the server rendered
fn current_config() -> Config {
    #[cfg(feature = "hydrate")]
    {
        crate::ui::browser::config_from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<Config>().unwrap_or_default()
    }
}

fn analytics_sink() -> Arc<dyn AnalyticsSink> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::ui::browser::GtagSink)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::core::ports::Headless)
    }
}

/// Provide site context to the component tree
pub fn provide_site_context() -> SiteContext {
    let ctx = SiteContext {
        config: StoredValue::new(current_config()),
        tracker: StoredValue::new(AnalyticsTracker::new(analytics_sink())),
    };

    provide_context(ctx);

    ctx
}

/// Use site context from anywhere in the component tree
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext should be provided")
}
