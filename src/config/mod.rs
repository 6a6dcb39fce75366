pub mod credentials;
pub mod loader;
pub mod types;

pub use types::*;
pub use loader::{load_settings, load_settings_with};
