//! Promotion discount engine for the restaurant platform.
//!
//! Validity-window checks and discount arithmetic for a promotion applied
//! to an order amount. Promotion CRUD and persistence stay with the caller.

pub mod engine;

pub use engine::{AppliedPromotion, PromotionEngine};
