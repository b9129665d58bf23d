//! # Category Repository
//!
//! CRUD for item categories and their per-gram seikuli (labor) rates.
//!
//! ## Snapshot Relationship
//! Bill items copy the category name and seikuli rate at finalize time,
//! so renaming, repricing or deleting a category here never changes any
//! stored bill. Deletion only removes the category from future pricing.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use aurum_core::validation::{validate_category_name, validate_seikuli_rate_paise};
use aurum_core::{Category, Money};

use crate::error::{DbError, DbResult};

/// Row mapping for the categories table.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    seikuli_rate_paise: i64,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            seikuli_rate_paise: row.seikuli_rate_paise,
        }
    }
}

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, seikuli_rate_paise
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Gets a category by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, seikuli_rate_paise
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    /// Inserts a new category.
    ///
    /// ## Validation
    /// - Name must be non-empty (after trimming) and unique
    /// - Seikuli rate must be non-negative; zero means no labor charge
    pub async fn insert(&self, name: &str, seikuli_rate: Money) -> DbResult<Category> {
        validate_category_name(name)?;
        validate_seikuli_rate_paise(seikuli_rate.paise())?;

        let category = Category::new(Uuid::new_v4().to_string(), name.trim(), seikuli_rate);

        debug!(id = %category.id, name = %category.name, "Inserting category");

        sqlx::query(
            r#"
            INSERT INTO categories (id, name, seikuli_rate_paise)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(category.seikuli_rate_paise)
        .execute(&self.pool)
        .await?;

        Ok(category)
    }

    /// Updates a category's name and seikuli rate.
    pub async fn update(&self, id: &str, name: &str, seikuli_rate: Money) -> DbResult<Category> {
        validate_category_name(name)?;
        validate_seikuli_rate_paise(seikuli_rate.paise())?;

        debug!(id = %id, name = %name, "Updating category");

        let result = sqlx::query(
            r#"
            UPDATE categories SET name = ?2, seikuli_rate_paise = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name.trim())
        .bind(seikuli_rate.paise())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(Category::new(id, name.trim(), seikuli_rate))
    }

    /// Deletes a category.
    ///
    /// Stored bills keep their snapshots; only future pricing is affected.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use aurum_core::Money;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_ordered_by_name() {
        let db = test_db().await;
        let repo = db.categories();

        repo.insert("Ring", Money::from_paise(20_000)).await.unwrap();
        repo.insert("Bangle", Money::from_paise(30_000)).await.unwrap();
        repo.insert("Chain", Money::from_paise(25_000)).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Bangle", "Chain", "Ring"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let db = test_db().await;
        let repo = db.categories();

        repo.insert("Ring", Money::from_paise(20_000)).await.unwrap();
        let err = repo
            .insert("Ring", Money::from_paise(25_000))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_name_trimmed_on_insert() {
        let db = test_db().await;
        let repo = db.categories();

        let category = repo
            .insert("  Necklace  ", Money::from_paise(50_000))
            .await
            .unwrap();
        assert_eq!(category.name, "Necklace");
    }

    #[tokio::test]
    async fn test_update_and_get() {
        let db = test_db().await;
        let repo = db.categories();

        let category = repo.insert("Ring", Money::from_paise(20_000)).await.unwrap();
        repo.update(&category.id, "Gold Ring", Money::from_paise(22_000))
            .await
            .unwrap();

        let fetched = repo.get_by_id(&category.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Gold Ring");
        assert_eq!(fetched.seikuli_rate_paise, 22_000);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;

        let err = db.categories().delete("no-such-id").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_inputs_rejected() {
        let db = test_db().await;
        let repo = db.categories();

        assert!(matches!(
            repo.insert("  ", Money::from_paise(100)).await.unwrap_err(),
            DbError::Validation(_)
        ));
        assert!(matches!(
            repo.insert("Ring", Money::from_paise(-1)).await.unwrap_err(),
            DbError::Validation(_)
        ));
    }
}
