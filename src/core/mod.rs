//! Core domain models for the site: quote validation, lead intake and the
//! background animation state.

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod intake;
pub mod quote;
pub mod rain;
#[cfg(test)]
mod tests;
