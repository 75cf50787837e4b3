use async_trait::async_trait;
use log::debug;
use sqlx::SqlitePool;

use breakwater_core::TradeDirection;
use breakwater_ports::{DailyVolume, DailyVolumeQuery, VolumeQueryError};

/// Format of the per-day aggregation key (UTC date)
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Creates the trades table backing the daily volume queries
///
/// One row per recorded fill: which market, which account, which UTC date,
/// which direction, and how much base/quote volume changed hands.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), VolumeQueryError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS trades (
            market_id TEXT NOT NULL,
            account_id TEXT NOT NULL DEFAULT '',
            date_utc TEXT NOT NULL,
            action TEXT NOT NULL,
            base_volume REAL NOT NULL,
            quote_volume REAL NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| VolumeQueryError::Database(e.to_string()))?;
    Ok(())
}

/// Bound query summing one day's traded volume across markets and accounts
///
/// Parameterized once at construction; `query_row` then answers for any
/// date key with a single aggregate row. An empty account set means "all
/// accounts".
pub struct DailyVolumeByDate {
    pool: SqlitePool,
    market_ids: Vec<String>,
    direction: TradeDirection,
    account_ids: Vec<String>,
    sql: String,
}

impl DailyVolumeByDate {
    pub fn new(
        pool: SqlitePool,
        market_ids: Vec<String>,
        direction: TradeDirection,
        account_ids: Vec<String>,
    ) -> Result<Self, VolumeQueryError> {
        if market_ids.is_empty() {
            return Err(VolumeQueryError::NoMarkets);
        }
        let sql = build_sql(market_ids.len(), account_ids.len());
        Ok(Self {
            pool,
            market_ids,
            direction,
            account_ids,
            sql,
        })
    }

    /// The market identifiers this query aggregates over
    pub fn market_ids(&self) -> &[String] {
        &self.market_ids
    }

    /// The direction this query aggregates over
    pub fn direction(&self) -> TradeDirection {
        self.direction
    }
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

fn build_sql(num_markets: usize, num_accounts: usize) -> String {
    let mut sql = format!(
        "SELECT COALESCE(SUM(base_volume), 0.0), COALESCE(SUM(quote_volume), 0.0) \
         FROM trades \
         WHERE market_id IN ({}) AND action = ? AND date_utc = ?",
        placeholders(num_markets),
    );
    if num_accounts > 0 {
        sql.push_str(&format!(" AND account_id IN ({})", placeholders(num_accounts)));
    }
    sql
}

#[async_trait]
impl DailyVolumeQuery for DailyVolumeByDate {
    async fn query_row(&self, date_key: &str) -> Result<DailyVolume, VolumeQueryError> {
        let mut query = sqlx::query_as::<_, (f64, f64)>(&self.sql);
        for id in &self.market_ids {
            query = query.bind(id);
        }
        query = query.bind(self.direction.as_str()).bind(date_key);
        for id in &self.account_ids {
            query = query.bind(id);
        }

        let (base_sold, quote_sold) = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| VolumeQueryError::Database(e.to_string()))?;

        if !base_sold.is_finite() || !quote_sold.is_finite() {
            return Err(VolumeQueryError::UnexpectedShape(format!(
                "non-finite volume sums ({base_sold}, {quote_sold})"
            )));
        }

        debug!(
            "daily volume for {} across {} market(s): base={}, quote={}",
            date_key,
            self.market_ids.len(),
            base_sold,
            quote_sold,
        );
        Ok(DailyVolume {
            base_sold,
            quote_sold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_shape_without_accounts() {
        let sql = build_sql(2, 0);
        assert!(sql.contains("market_id IN (?, ?)"));
        assert!(!sql.contains("account_id"));
    }

    #[test]
    fn test_sql_shape_with_accounts() {
        let sql = build_sql(1, 3);
        assert!(sql.contains("market_id IN (?)"));
        assert!(sql.contains("account_id IN (?, ?, ?)"));
    }
}
