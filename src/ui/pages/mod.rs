//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home (landing) page
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
