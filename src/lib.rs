//! Shopify theme SEO checker.
//!
//! Installs into a shop through OAuth, fetches theme files from the Admin
//! REST API and scores their markup against a fixed set of SEO rules.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod seo;
pub mod shopify;
