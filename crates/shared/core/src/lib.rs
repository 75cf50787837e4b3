//! Breakwater Core Domain
//!
//! Pure domain types for the Breakwater submission-filter layer.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    AssetCode,
    OfferOperation,
    OpenOrder,
    // Core trading entities
    Order,
    OrderBook,
    OrderStyle,
    ParseDirectionError,
    ParseStyleError,
    TradeDirection,
    TradingPair,
    TransactionId,
};
pub use values::{Price, Quantity, Timestamp};
