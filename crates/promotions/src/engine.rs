//! Promotion engine: computes the discount and final payable amount for a
//! promotion applied to a monetary amount.
//!
//! Inputs are read-only; the engine never mutates a promotion and holds no
//! state of its own. Callers validate amounts before calling: a negative
//! amount is not rejected here and produces arithmetic garbage, not a panic.

use chrono::{NaiveDate, Utc};
use resto_core::config::PromotionsConfig;
use resto_core::promotions::{Promotion, PromotionType};
use resto_core::{RestoError, RestoResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of applying a promotion to an order amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedPromotion {
    pub original_amount: f64,
    pub discount: f64,
    pub final_amount: f64,
}

/// Promotion engine — stateless discount computation over promotion
/// definitions.
pub struct PromotionEngine {
    config: PromotionsConfig,
}

impl PromotionEngine {
    pub fn new(config: &PromotionsConfig) -> Self {
        info!(enabled = config.enabled, "Promotion engine initialized");
        Self {
            config: config.clone(),
        }
    }

    /// Discount for `promotion` on `amount`.
    ///
    /// Fixed discounts are clamped to the order amount so the final price
    /// cannot go negative. Buy-one-get-one depends on order line
    /// composition, which this amount-only interface cannot see, so it
    /// yields zero here; order-level code applies it per line item.
    pub fn calculate_discount(&self, promotion: &Promotion, amount: f64) -> f64 {
        match promotion.promotion_type {
            PromotionType::Percentage => amount * (promotion.value / 100.0),
            PromotionType::FixedAmount => promotion.value.min(amount),
            PromotionType::BuyOneGetOne => 0.0,
        }
    }

    /// Apply `promotion` to `amount` as of today.
    pub fn apply_promotion(
        &self,
        promotion: &Promotion,
        amount: f64,
    ) -> RestoResult<AppliedPromotion> {
        self.apply_promotion_on(promotion, amount, Utc::now().date_naive())
    }

    /// Apply `promotion` to `amount` as of a given date.
    ///
    /// Fails with `PromotionInactive` when `as_of` falls outside the
    /// validity window; the error does not distinguish not-yet-started
    /// from expired.
    pub fn apply_promotion_on(
        &self,
        promotion: &Promotion,
        amount: f64,
        as_of: NaiveDate,
    ) -> RestoResult<AppliedPromotion> {
        if !promotion.is_active_on(as_of) {
            metrics::counter!("promotions.rejected_inactive").increment(1);
            return Err(RestoError::PromotionInactive {
                code: promotion.code.clone(),
            });
        }

        let discount = self.calculate_discount(promotion, amount);
        let applied = AppliedPromotion {
            original_amount: amount,
            discount,
            final_amount: amount - discount,
        };

        metrics::counter!("promotions.applied").increment(1);

        debug!(
            code = %promotion.code,
            kind = ?promotion.promotion_type,
            discount = applied.discount,
            final_amount = applied.final_amount,
            "Promotion applied"
        );

        Ok(applied)
    }

    pub fn config(&self) -> &PromotionsConfig {
        &self.config
    }
}
