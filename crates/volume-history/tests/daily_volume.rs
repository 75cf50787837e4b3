//! Integration tests for the daily volume query against in-memory SQLite

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use breakwater_core::TradeDirection;
use breakwater_ports::{DailyVolumeQuery, VolumeQueryError};
use breakwater_volume_history::{DailyVolumeByDate, ensure_schema, make_market_id};

/// In-memory SQLite disappears when its connection closes, so the pool is
/// pinned to a single connection for the lifetime of the test.
async fn memory_pool() -> SqlitePool {
    let _ = env_logger::try_init();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&pool).await.expect("Failed to create schema");
    pool
}

async fn record_trade(
    pool: &SqlitePool,
    market_id: &str,
    account_id: &str,
    date_utc: &str,
    action: &str,
    base_volume: f64,
    quote_volume: f64,
) {
    sqlx::query(
        "INSERT INTO trades (market_id, account_id, date_utc, action, base_volume, quote_volume) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(market_id)
    .bind(account_id)
    .bind(date_utc)
    .bind(action)
    .bind(base_volume)
    .bind(quote_volume)
    .execute(pool)
    .await
    .expect("Failed to record trade");
}

#[tokio::test]
async fn test_sums_across_markets_for_one_date() {
    let pool = memory_pool().await;
    let primary = make_market_id("kraken", "XLM", "USD");
    let extra = "binance:XLM/USDT".to_string();

    record_trade(&pool, &primary, "acct-1", "2026-08-06", "sell", 100.0, 12.0).await;
    record_trade(&pool, &extra, "acct-1", "2026-08-06", "sell", 50.0, 6.0).await;
    // Different date, must not count
    record_trade(&pool, &primary, "acct-1", "2026-08-05", "sell", 999.0, 999.0).await;

    let query = DailyVolumeByDate::new(
        pool,
        vec![primary, extra],
        TradeDirection::Sell,
        Vec::new(),
    )
    .unwrap();

    let volume = query.query_row("2026-08-06").await.unwrap();
    assert_eq!(volume.base_sold, 150.0);
    assert_eq!(volume.quote_sold, 18.0);
}

#[tokio::test]
async fn test_zero_for_unseen_date() {
    let pool = memory_pool().await;
    let market = make_market_id("kraken", "XLM", "USD");
    record_trade(&pool, &market, "acct-1", "2026-08-05", "sell", 10.0, 1.2).await;

    let query =
        DailyVolumeByDate::new(pool, vec![market], TradeDirection::Sell, Vec::new()).unwrap();

    let volume = query.query_row("2026-08-06").await.unwrap();
    assert_eq!(volume.base_sold, 0.0);
    assert_eq!(volume.quote_sold, 0.0);
}

#[tokio::test]
async fn test_filters_by_direction() {
    let pool = memory_pool().await;
    let market = make_market_id("kraken", "XLM", "USD");
    record_trade(&pool, &market, "acct-1", "2026-08-06", "sell", 30.0, 3.6).await;
    record_trade(&pool, &market, "acct-1", "2026-08-06", "buy", 70.0, 8.4).await;

    let query =
        DailyVolumeByDate::new(pool, vec![market], TradeDirection::Sell, Vec::new()).unwrap();

    let volume = query.query_row("2026-08-06").await.unwrap();
    assert_eq!(volume.base_sold, 30.0);
    assert_eq!(volume.quote_sold, 3.6);
}

#[tokio::test]
async fn test_filters_by_account_when_configured() {
    let pool = memory_pool().await;
    let market = make_market_id("kraken", "XLM", "USD");
    record_trade(&pool, &market, "acct-1", "2026-08-06", "sell", 30.0, 3.6).await;
    record_trade(&pool, &market, "acct-2", "2026-08-06", "sell", 40.0, 4.8).await;
    record_trade(&pool, &market, "acct-3", "2026-08-06", "sell", 50.0, 6.0).await;

    let query = DailyVolumeByDate::new(
        pool,
        vec![market],
        TradeDirection::Sell,
        vec!["acct-1".to_string(), "acct-3".to_string()],
    )
    .unwrap();

    let volume = query.query_row("2026-08-06").await.unwrap();
    assert_eq!(volume.base_sold, 80.0);
    assert_eq!(volume.quote_sold, 9.6);
}

#[tokio::test]
async fn test_all_accounts_when_none_configured() {
    let pool = memory_pool().await;
    let market = make_market_id("kraken", "XLM", "USD");
    record_trade(&pool, &market, "acct-1", "2026-08-06", "sell", 30.0, 3.6).await;
    record_trade(&pool, &market, "acct-2", "2026-08-06", "sell", 40.0, 4.8).await;

    let query =
        DailyVolumeByDate::new(pool, vec![market], TradeDirection::Sell, Vec::new()).unwrap();

    let volume = query.query_row("2026-08-06").await.unwrap();
    assert_eq!(volume.base_sold, 70.0);
}

#[tokio::test]
async fn test_rejects_empty_market_ids() {
    let pool = memory_pool().await;
    let result = DailyVolumeByDate::new(pool, Vec::new(), TradeDirection::Sell, Vec::new());
    assert!(matches!(result, Err(VolumeQueryError::NoMarkets)));
}
