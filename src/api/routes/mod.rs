pub mod auth;
pub mod health;
pub mod seo;
pub mod themes;
