//! # Settings Repository
//!
//! Store-wide rate settings: the daily gold rate and the GST rate.
//!
//! ## Singleton Row
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  settings table                                                         │
//! │                                                                         │
//! │  Exactly one row, pinned by CHECK (id = 1) and seeded by the initial   │
//! │  migration. Updates never insert; they rewrite the single row.         │
//! │                                                                         │
//! │  id │ gold_rate_paise │ gst_bps │ updated_at                           │
//! │  ───┼─────────────────┼─────────┼──────────────────────                │
//! │   1 │         600000  │    300  │ 2026-08-26T05:35:00Z                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bills snapshot these rates at finalize time; changing them here never
//! rewrites history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

use aurum_core::validation::{validate_gold_rate_paise, validate_gst_bps};
use aurum_core::{GstRate, Money};

use crate::error::DbResult;

/// The store-wide rate settings row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    /// Gold rate in paise per gram.
    pub gold_rate_paise: i64,

    /// GST rate in basis points (300 = 3%).
    pub gst_bps: u32,

    /// When the settings were last changed.
    pub updated_at: DateTime<Utc>,
}

impl StoreSettings {
    /// Returns the gold rate as Money per gram.
    pub fn gold_rate(&self) -> Money {
        Money::from_paise(self.gold_rate_paise)
    }

    /// Returns the GST rate.
    pub fn gst(&self) -> GstRate {
        GstRate::from_bps(self.gst_bps)
    }
}

/// Repository for the settings singleton.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads the current settings.
    ///
    /// The row is seeded by the initial migration, so this always
    /// succeeds on a migrated database.
    pub async fn get(&self) -> DbResult<StoreSettings> {
        let settings = sqlx::query_as::<_, StoreSettings>(
            r#"
            SELECT gold_rate_paise, gst_bps, updated_at
            FROM settings
            WHERE id = 1
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Updates the daily gold rate.
    ///
    /// ## Validation
    /// The rate must be positive; a zero gold rate is always a settings
    /// mistake and is rejected before touching the database.
    pub async fn update_gold_rate(&self, rate: Money) -> DbResult<StoreSettings> {
        validate_gold_rate_paise(rate.paise())?;

        debug!(gold_rate_paise = rate.paise(), "Updating gold rate");

        let now = Utc::now();
        sqlx::query(
            r#"
            UPDATE settings SET gold_rate_paise = ?1, updated_at = ?2
            WHERE id = 1
            "#,
        )
        .bind(rate.paise())
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get().await
    }

    /// Updates the GST rate.
    ///
    /// ## Validation
    /// The rate must be between 0 and 10000 basis points (0% to 100%).
    pub async fn update_gst_rate(&self, rate: GstRate) -> DbResult<StoreSettings> {
        validate_gst_bps(rate.bps())?;

        debug!(gst_bps = rate.bps(), "Updating GST rate");

        let now = Utc::now();
        sqlx::query(
            r#"
            UPDATE settings SET gst_bps = ?1, updated_at = ?2
            WHERE id = 1
            "#,
        )
        .bind(rate.bps())
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use aurum_core::{GstRate, Money};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_seeded_defaults() {
        let db = test_db().await;

        let settings = db.settings().get().await.unwrap();
        assert_eq!(settings.gold_rate_paise, 0);
        assert_eq!(settings.gst_bps, 300);
    }

    #[tokio::test]
    async fn test_update_gold_rate() {
        let db = test_db().await;

        let settings = db
            .settings()
            .update_gold_rate(Money::from_paise(600_000))
            .await
            .unwrap();
        assert_eq!(settings.gold_rate_paise, 600_000);

        // GST untouched
        assert_eq!(settings.gst_bps, 300);
    }

    #[tokio::test]
    async fn test_update_gst_rate() {
        let db = test_db().await;

        let settings = db
            .settings()
            .update_gst_rate(GstRate::from_bps(500))
            .await
            .unwrap();
        assert_eq!(settings.gst_bps, 500);
    }

    #[tokio::test]
    async fn test_settings_serialize_camel_case() {
        let db = test_db().await;

        let settings = db.settings().get().await.unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"goldRatePaise\":0"));
        assert!(json.contains("\"gstBps\":300"));
    }

    #[tokio::test]
    async fn test_zero_gold_rate_rejected() {
        let db = test_db().await;

        let err = db
            .settings()
            .update_gold_rate(Money::zero())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_gst_rejected() {
        let db = test_db().await;

        let err = db
            .settings()
            .update_gst_rate(GstRate::from_bps(10_001))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }
}
