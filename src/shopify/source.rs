use async_trait::async_trait;
use crate::errors::SeoError;
use super::types::AssetInfo;

/// Where theme files come from. Implemented by [`super::ShopifyClient`];
/// tests and the offline CLI supply their own.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    /// Domain of the shop the theme belongs to
    fn shop(&self) -> &str;

    /// Id of the published theme, if the shop has one
    async fn get_active_theme_id(&self) -> Result<Option<String>, SeoError>;

    /// All assets of a theme. Empty when the listing is unavailable.
    async fn list_theme_assets(&self, theme_id: &str) -> Result<Vec<AssetInfo>, SeoError>;

    /// Text content of one asset. `None` when it cannot be retrieved.
    async fn get_theme_asset(&self, theme_id: &str, asset_key: &str) -> Result<Option<String>, SeoError>;
}
