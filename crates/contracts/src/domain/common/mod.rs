//! Common types and traits for all aggregates

pub mod aggregate_id;

pub use aggregate_id::AggregateId;

/// Serde default for visibility flags that are `true` unless stated otherwise.
pub(crate) fn default_true() -> bool {
    true
}
