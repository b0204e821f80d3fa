//! Loyalty computation engine for the restaurant platform.
//!
//! Pure accrual, redemption, and tier derivation over explicit point
//! balances. Persistence and concurrency control stay with the caller.

pub mod engine;

pub use engine::{LoyaltyEngine, PointsAccrual, SpendingAccrual};
