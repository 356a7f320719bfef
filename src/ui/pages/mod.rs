//! Application pages module
//!
//! - Landing page (`/`, `/en`, `/pt`)
//! - Demo request page
//! - Legal pages
//! - 404 page

mod demo;
mod home;
mod legal;
mod not_found;

pub use demo::DemoPage;
pub use home::HomePage;
pub use legal::{LegalDocument, LegalPage};
pub use not_found::NotFoundPage;
