use chrono::Utc;
use crate::errors::SeoError;
use super::Database;

impl Database {
    /// Save or replace a shop's access token.
    pub fn save_token(&self, shop: &str, token: &str) -> Result<(), SeoError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO sessions (shop, token, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![shop, token, Utc::now().to_rfc3339()],
        ).map_err(|e| SeoError::Database(format!("Insert failed: {}", e)))?;
        Ok(())
    }

    pub fn get_token(&self, shop: &str) -> Result<Option<String>, SeoError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT token FROM sessions WHERE shop = ?1")
            .map_err(|e| SeoError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![shop], |row: &rusqlite::Row| row.get::<_, String>(0)) {
            Ok(token) => Ok(Some(token)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SeoError::Database(format!("Query error: {}", e))),
        }
    }

    /// Forget a shop's token. Returns whether a token was stored.
    pub fn delete_token(&self, shop: &str) -> Result<bool, SeoError> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM sessions WHERE shop = ?1", rusqlite::params![shop])
            .map_err(|e| SeoError::Database(format!("Delete failed: {}", e)))?;
        Ok(affected > 0)
    }

    pub fn list_shops(&self) -> Result<Vec<String>, SeoError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT shop FROM sessions ORDER BY shop")
            .map_err(|e| SeoError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], |row: &rusqlite::Row| row.get::<_, String>(0))
            .map_err(|e| SeoError::Database(format!("Query error: {}", e)))?;

        let mut shops = Vec::new();
        for row in rows {
            shops.push(row.map_err(|e| SeoError::Database(format!("Row error: {}", e)))?);
        }
        Ok(shops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_get_token() {
        let db = Database::in_memory().unwrap();
        db.save_token("demo.myshopify.com", "shpat_abc").unwrap();

        let token = db.get_token("demo.myshopify.com").unwrap();
        assert_eq!(token, Some("shpat_abc".to_string()));
    }

    #[test]
    fn test_get_unknown_shop() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_token("unknown.myshopify.com").unwrap().is_none());
    }

    #[test]
    fn test_save_token_upsert() {
        let db = Database::in_memory().unwrap();
        db.save_token("demo.myshopify.com", "old").unwrap();
        db.save_token("demo.myshopify.com", "new").unwrap();

        assert_eq!(db.get_token("demo.myshopify.com").unwrap().as_deref(), Some("new"));
        assert_eq!(db.list_shops().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_token() {
        let db = Database::in_memory().unwrap();
        db.save_token("demo.myshopify.com", "t").unwrap();

        assert!(db.delete_token("demo.myshopify.com").unwrap());
        assert!(!db.delete_token("demo.myshopify.com").unwrap());
        assert!(db.get_token("demo.myshopify.com").unwrap().is_none());
    }

    #[test]
    fn test_list_shops_sorted() {
        let db = Database::in_memory().unwrap();
        db.save_token("b.myshopify.com", "t2").unwrap();
        db.save_token("a.myshopify.com", "t1").unwrap();
        assert_eq!(db.list_shops().unwrap(), vec!["a.myshopify.com", "b.myshopify.com"]);
    }
}
