use crate::cli::commands::ShopsArgs;
use crate::db::Database;
use crate::errors::SeoError;
use crate::{config, shopify};
use tracing::info;

pub async fn handle_shops(args: ShopsArgs) -> Result<(), SeoError> {
    let settings = config::load_settings(args.config.as_deref()).await?;
    let db = Database::new(&settings.database_url)?;
    print!("{}", run_shops(&db, args.forget.as_deref())?);
    Ok(())
}

/// List installed shops, or forget one shop's token when `forget` is set.
pub fn run_shops(db: &Database, forget: Option<&str>) -> Result<String, SeoError> {
    if let Some(shop) = forget {
        shopify::validate_shop(shop)?;
        if !db.delete_token(shop)? {
            return Err(SeoError::NotFound(format!("Shop {} is not installed", shop)));
        }
        info!(shop, "Access token removed");
        return Ok(format!("Removed access token for {}\n", shop));
    }

    let shops = db.list_shops()?;
    if shops.is_empty() {
        return Ok("No shops installed\n".to_string());
    }
    Ok(shops.iter().map(|shop| format!("{}\n", shop)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_installed_shops() {
        let db = Database::in_memory().unwrap();
        assert_eq!(run_shops(&db, None).unwrap(), "No shops installed\n");

        db.save_token("b.myshopify.com", "t2").unwrap();
        db.save_token("a.myshopify.com", "t1").unwrap();
        assert_eq!(run_shops(&db, None).unwrap(), "a.myshopify.com\nb.myshopify.com\n");
    }

    #[test]
    fn test_forget_shop() {
        let db = Database::in_memory().unwrap();
        db.save_token("demo.myshopify.com", "t").unwrap();

        let out = run_shops(&db, Some("demo.myshopify.com")).unwrap();
        assert_eq!(out, "Removed access token for demo.myshopify.com\n");
        assert!(db.get_token("demo.myshopify.com").unwrap().is_none());

        let err = run_shops(&db, Some("demo.myshopify.com")).unwrap_err();
        assert!(matches!(err, SeoError::NotFound(_)));
    }

    #[test]
    fn test_forget_rejects_invalid_shop() {
        let db = Database::in_memory().unwrap();
        let err = run_shops(&db, Some("https://evil.example/")).unwrap_err();
        assert!(matches!(err, SeoError::InvalidShop(_)));
    }
}
