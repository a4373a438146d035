//! Common types and traits shared by all aggregates

pub mod aggregate_id;
pub mod price;

// Re-exports
pub use aggregate_id::AggregateId;
pub use price::Price;
