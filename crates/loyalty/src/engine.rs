//! Core loyalty engine: tier derivation, point accrual with tier
//! multipliers, spending tracking, and point redemption.
//!
//! Every operation takes the current balance as an explicit parameter and
//! returns derived values for the caller to persist. Two callers updating
//! the same customer concurrently must serialize their read-modify-write
//! themselves (row lock or optimistic check); there is no compare-and-swap
//! primitive here.

use resto_core::config::LoyaltyConfig;
use resto_core::loyalty::MembershipTier;
use resto_core::{RestoError, RestoResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of crediting points to a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsAccrual {
    pub new_points: u64,
    /// Points actually credited after the tier multiplier. Zero for no-op
    /// requests.
    pub points_added: u64,
}

/// Result of recording a spend: point accrual plus the updated spending
/// total. The two always move together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingAccrual {
    pub new_points: u64,
    pub points_earned: u64,
    pub new_total_spent: f64,
}

/// Loyalty engine — stateless computation over customer point balances.
pub struct LoyaltyEngine {
    config: LoyaltyConfig,
}

impl LoyaltyEngine {
    pub fn new(config: &LoyaltyConfig) -> Self {
        info!(
            enabled = config.enabled,
            points_rate = config.points_rate,
            "Loyalty engine initialized"
        );
        Self {
            config: config.clone(),
        }
    }

    /// Membership tier held at a point balance.
    pub fn tier_for(&self, points: u64) -> MembershipTier {
        MembershipTier::for_points(points)
    }

    /// Credit points to a balance.
    ///
    /// Non-positive requests are a no-op. The multiplier comes from the
    /// tier held *before* the credit: a customer crossing a threshold in
    /// this transaction still earns at their old rate.
    pub fn add_loyalty_points(&self, current_points: u64, points_to_add: i64) -> PointsAccrual {
        if points_to_add <= 0 {
            return PointsAccrual {
                new_points: current_points,
                points_added: 0,
            };
        }

        let tier = MembershipTier::for_points(current_points);
        let points_added = (points_to_add as f64 * tier.points_multiplier()).floor() as u64;
        let new_points = current_points + points_added;

        metrics::counter!("loyalty.points_earned").increment(points_added);

        debug!(
            current = current_points,
            requested = points_to_add,
            credited = points_added,
            tier = ?tier,
            "Points credited"
        );

        PointsAccrual {
            new_points,
            points_added,
        }
    }

    /// Points still needed to reach the next tier, or `None` at Diamond.
    /// Clamped at zero if the balance already sits past the boundary.
    pub fn points_to_next_tier(&self, current_points: u64) -> Option<u64> {
        MembershipTier::for_points(current_points)
            .next()
            .map(|next| next.points_threshold().saturating_sub(current_points))
    }

    /// Record a spend: bump the spending total and credit points at the
    /// configured rate, floored before the tier multiplier applies.
    /// Non-positive amounts are a no-op.
    pub fn add_spending(
        &self,
        current_points: u64,
        current_total_spent: f64,
        amount: f64,
    ) -> SpendingAccrual {
        if amount <= 0.0 {
            return SpendingAccrual {
                new_points: current_points,
                points_earned: 0,
                new_total_spent: current_total_spent,
            };
        }

        let base_points = (amount * self.config.points_rate).floor() as i64;
        let accrual = self.add_loyalty_points(current_points, base_points);

        SpendingAccrual {
            new_points: accrual.new_points,
            points_earned: accrual.points_added,
            new_total_spent: current_total_spent + amount,
        }
    }

    /// Debit redeemed points from a balance.
    ///
    /// Fails with `InsufficientPoints` when the balance does not cover the
    /// request; there is no partial redemption.
    pub fn redeem_loyalty_points(
        &self,
        current_points: u64,
        points_to_redeem: u64,
    ) -> RestoResult<u64> {
        if current_points < points_to_redeem {
            return Err(RestoError::InsufficientPoints {
                requested: points_to_redeem,
                available: current_points,
            });
        }

        let new_points = current_points - points_to_redeem;

        metrics::counter!("loyalty.points_redeemed").increment(points_to_redeem);
        metrics::counter!("loyalty.redemptions").increment(1);

        debug!(
            redeemed = points_to_redeem,
            new_balance = new_points,
            "Points redeemed"
        );

        Ok(new_points)
    }

    pub fn config(&self) -> &LoyaltyConfig {
        &self.config
    }
}
