pub mod client;
pub mod oauth;
pub mod source;
pub mod types;

pub use client::ShopifyClient;
pub use oauth::{exchange_code_for_token, install_url, validate_shop};
pub use source::ThemeSource;
pub use types::{AssetInfo, ThemeSummary};
