//! # Template Factories
//!
//! Pure functions producing default sections, chrome and pages. No two calls
//! share any sub-object, and every entity and list item gets a fresh ID.

pub mod chrome;
pub mod pages;
pub mod routes;
pub mod sections;

pub use chrome::{default_footer, default_navbar};
pub use pages::*;
pub use routes::{default_site, guess_page_name, is_known_route, known_routes, page_for_route};
pub use sections::*;
