//! # Bill Repository
//!
//! Persistence for finalized bills and their line items.
//!
//! ## Bill Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bill Write Path                                   │
//! │                                                                         │
//! │  DraftBill::finalize() → (Bill, items)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  insert_bill(&bill, items)                                             │
//! │       │                                                                 │
//! │       ├── BEGIN                                                        │
//! │       ├── INSERT INTO bills (header + rate snapshots + totals)         │
//! │       ├── INSERT INTO bill_items (one per line, ordered by position)   │
//! │       └── COMMIT                                                       │
//! │                                                                         │
//! │  Header and items land together or not at all. A failure mid-write    │
//! │  rolls the whole bill back, so history never shows a bill without     │
//! │  its items.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## History Read Path
//! The history screen filters by store-local calendar day. Callers pass
//! local dates plus the store time zone; the repository converts them to
//! a half-open UTC range and runs an indexed range scan on `bill_date`.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use aurum_core::time::day_range_utc;
use aurum_core::{Bill, BillItem};

use crate::error::DbResult;

/// Row mapping for the bills table.
#[derive(Debug, sqlx::FromRow)]
struct BillRow {
    id: String,
    customer_name: String,
    bill_date: DateTime<Utc>,
    gold_rate_paise: i64,
    gst_bps: u32,
    subtotal_paise: i64,
    gst_paise: i64,
    grand_total_paise: i64,
}

impl From<BillRow> for Bill {
    fn from(row: BillRow) -> Self {
        Bill {
            id: row.id,
            customer_name: row.customer_name,
            bill_date: row.bill_date,
            gold_rate_paise: row.gold_rate_paise,
            gst_bps: row.gst_bps,
            subtotal_paise: row.subtotal_paise,
            gst_paise: row.gst_paise,
            grand_total_paise: row.grand_total_paise,
        }
    }
}

/// Row mapping for the bill_items table.
#[derive(Debug, sqlx::FromRow)]
struct BillItemRow {
    id: String,
    category_id: String,
    category_name: String,
    weight_mg: i64,
    seikuli_rate_paise: i64,
    gold_amount_paise: i64,
    seikuli_amount_paise: i64,
    line_total_paise: i64,
}

impl From<BillItemRow> for BillItem {
    fn from(row: BillItemRow) -> Self {
        BillItem {
            id: row.id,
            category_id: row.category_id,
            category_name: row.category_name,
            weight_mg: row.weight_mg,
            seikuli_rate_paise: row.seikuli_rate_paise,
            gold_amount_paise: row.gold_amount_paise,
            seikuli_amount_paise: row.seikuli_amount_paise,
            line_total_paise: row.line_total_paise,
        }
    }
}

/// Repository for bill database operations.
#[derive(Debug, Clone)]
pub struct BillRepository {
    pool: SqlitePool,
}

impl BillRepository {
    /// Creates a new BillRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BillRepository { pool }
    }

    /// Inserts a finalized bill with its line items atomically.
    ///
    /// Header and items go in a single transaction; a failure on any
    /// item rolls back the header too.
    pub async fn insert_bill(&self, bill: &Bill, items: &[BillItem]) -> DbResult<()> {
        debug!(
            id = %bill.id,
            items = items.len(),
            grand_total_paise = bill.grand_total_paise,
            "Inserting bill"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO bills (
                id, customer_name, bill_date,
                gold_rate_paise, gst_bps,
                subtotal_paise, gst_paise, grand_total_paise
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&bill.id)
        .bind(&bill.customer_name)
        .bind(bill.bill_date)
        .bind(bill.gold_rate_paise)
        .bind(bill.gst_bps)
        .bind(bill.subtotal_paise)
        .bind(bill.gst_paise)
        .bind(bill.grand_total_paise)
        .execute(&mut *tx)
        .await?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO bill_items (
                    id, bill_id, position,
                    category_id, category_name, weight_mg,
                    seikuli_rate_paise, gold_amount_paise,
                    seikuli_amount_paise, line_total_paise
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
            )
            .bind(&item.id)
            .bind(&bill.id)
            .bind(position as i64)
            .bind(&item.category_id)
            .bind(&item.category_name)
            .bind(item.weight_mg)
            .bind(item.seikuli_rate_paise)
            .bind(item.gold_amount_paise)
            .bind(item.seikuli_amount_paise)
            .bind(item.line_total_paise)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Lists bills whose bill date falls within an inclusive range of
    /// store-local calendar days, newest first.
    ///
    /// `start` and `end` are local dates in the store's time zone; the
    /// conversion to UTC instants happens here so the query can use the
    /// `bill_date` index.
    pub async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        tz: FixedOffset,
    ) -> DbResult<Vec<Bill>> {
        let (start_utc, end_utc) = day_range_utc(start, end, tz);

        debug!(%start_utc, %end_utc, "Listing bills in range");

        let rows = sqlx::query_as::<_, BillRow>(
            r#"
            SELECT
                id, customer_name, bill_date,
                gold_rate_paise, gst_bps,
                subtotal_paise, gst_paise, grand_total_paise
            FROM bills
            WHERE bill_date >= ?1 AND bill_date < ?2
            ORDER BY bill_date DESC
            "#,
        )
        .bind(start_utc)
        .bind(end_utc)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Bill::from).collect())
    }

    /// Gets a bill header by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Bill>> {
        let row = sqlx::query_as::<_, BillRow>(
            r#"
            SELECT
                id, customer_name, bill_date,
                gold_rate_paise, gst_bps,
                subtotal_paise, gst_paise, grand_total_paise
            FROM bills
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bill::from))
    }

    /// Gets all line items for a bill, in original entry order.
    pub async fn get_items(&self, bill_id: &str) -> DbResult<Vec<BillItem>> {
        let rows = sqlx::query_as::<_, BillItemRow>(
            r#"
            SELECT
                id, category_id, category_name, weight_mg,
                seikuli_rate_paise, gold_amount_paise,
                seikuli_amount_paise, line_total_paise
            FROM bill_items
            WHERE bill_id = ?1
            ORDER BY position
            "#,
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BillItem::from).collect())
    }

    /// Counts all stored bills.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::pool::{Database, DbConfig};
    use aurum_core::time::store_tz;
    use aurum_core::{Bill, BillItem};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn bill_at(id: &str, bill_date: chrono::DateTime<Utc>) -> (Bill, Vec<BillItem>) {
        let bill = Bill {
            id: id.to_string(),
            customer_name: "Meena Kumari".to_string(),
            bill_date,
            gold_rate_paise: 600_000,
            gst_bps: 300,
            subtotal_paise: 1_240_000,
            gst_paise: 37_200,
            grand_total_paise: 1_277_200,
        };
        let items = vec![BillItem {
            id: format!("{id}-item-1"),
            category_id: "cat-1".to_string(),
            category_name: "Ring".to_string(),
            weight_mg: 2_000,
            seikuli_rate_paise: 20_000,
            gold_amount_paise: 1_200_000,
            seikuli_amount_paise: 40_000,
            line_total_paise: 1_240_000,
        }];
        (bill, items)
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = test_db().await;
        let repo = db.bills();

        let (bill, items) = bill_at("bill-1", Utc::now());
        repo.insert_bill(&bill, &items).await.unwrap();

        let fetched = repo.get_by_id("bill-1").await.unwrap().unwrap();
        assert_eq!(fetched.customer_name, "Meena Kumari");
        assert_eq!(fetched.grand_total_paise, 1_277_200);

        let fetched_items = repo.get_items("bill-1").await.unwrap();
        assert_eq!(fetched_items.len(), 1);
        assert_eq!(fetched_items[0].category_name, "Ring");
        assert_eq!(fetched_items[0].line_total_paise, 1_240_000);
    }

    #[tokio::test]
    async fn test_items_preserve_entry_order() {
        let db = test_db().await;
        let repo = db.bills();

        let (bill, mut items) = bill_at("bill-1", Utc::now());
        let mut second = items[0].clone();
        second.id = "bill-1-item-2".to_string();
        second.category_name = "Chain".to_string();
        items.push(second);

        repo.insert_bill(&bill, &items).await.unwrap();

        let fetched = repo.get_items("bill-1").await.unwrap();
        assert_eq!(fetched[0].category_name, "Ring");
        assert_eq!(fetched[1].category_name, "Chain");
    }

    #[tokio::test]
    async fn test_same_day_filter_uses_local_days() {
        let db = test_db().await;
        let repo = db.bills();

        // 2026-08-25 20:00 UTC is 01:30 on the 26th in IST.
        let late_evening = Utc.with_ymd_and_hms(2026, 8, 25, 20, 0, 0).unwrap();
        let (bill, items) = bill_at("bill-1", late_evening);
        repo.insert_bill(&bill, &items).await.unwrap();

        let aug_26 = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let found = repo.list_between(aug_26, aug_26, store_tz()).await.unwrap();
        assert_eq!(found.len(), 1);

        let aug_25 = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let found = repo.list_between(aug_25, aug_25, store_tz()).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = test_db().await;
        let repo = db.bills();

        let morning = Utc.with_ymd_and_hms(2026, 8, 26, 4, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2026, 8, 26, 8, 0, 0).unwrap();

        let (bill, items) = bill_at("bill-morning", morning);
        repo.insert_bill(&bill, &items).await.unwrap();
        let (bill, items) = bill_at("bill-noon", noon);
        repo.insert_bill(&bill, &items).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let bills = repo.list_between(day, day, store_tz()).await.unwrap();

        let ids: Vec<&str> = bills.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bill-noon", "bill-morning"]);
    }

    #[tokio::test]
    async fn test_duplicate_bill_id_rolls_back_items() {
        let db = test_db().await;
        let repo = db.bills();

        let (bill, items) = bill_at("bill-1", Utc::now());
        repo.insert_bill(&bill, &items).await.unwrap();

        // Second insert with the same header id must fail...
        let (dup, mut dup_items) = bill_at("bill-1", Utc::now());
        dup_items[0].id = "other-item".to_string();
        assert!(repo.insert_bill(&dup, &dup_items).await.is_err());

        // ...and leave no stray items behind.
        let fetched = repo.get_items("bill-1").await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, "bill-1-item-1");
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
