//! Loyalty program domain types — membership tiers with point thresholds,
//! per-tier benefits, and the customer profile they derive from.
//!
//! The tier is a pure derived view over the point balance. It is never
//! stored, and no event fires on a tier change; callers that need to
//! detect one compare the tier before and after an update.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Tier System ────────────────────────────────────────────────────────────

/// Membership tier levels with escalating benefits.
///
/// Ordering is part of the contract: `Iron < Silver < Gold < Diamond`,
/// and the tier for a balance never decreases as the balance grows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    /// Entry level. No discount, 1x earn rate.
    Iron,
    /// 1000 points. 5% discount, 1.25x earn rate.
    Silver,
    /// 5000 points. 10% discount, 1.5x earn rate.
    Gold,
    /// 15000 points. 15% discount, 2x earn rate.
    Diamond,
}

impl MembershipTier {
    /// Inclusive lower point bound for holding this tier.
    pub fn points_threshold(&self) -> u64 {
        match self {
            MembershipTier::Iron => 0,
            MembershipTier::Silver => 1_000,
            MembershipTier::Gold => 5_000,
            MembershipTier::Diamond => 15_000,
        }
    }

    /// Percentage discount granted at this tier.
    pub fn discount_percentage(&self) -> u8 {
        match self {
            MembershipTier::Iron => 0,
            MembershipTier::Silver => 5,
            MembershipTier::Gold => 10,
            MembershipTier::Diamond => 15,
        }
    }

    /// Multiplier applied to base points when earning at this tier.
    pub fn points_multiplier(&self) -> f64 {
        match self {
            MembershipTier::Iron => 1.0,
            MembershipTier::Silver => 1.25,
            MembershipTier::Gold => 1.5,
            MembershipTier::Diamond => 2.0,
        }
    }

    /// The tier directly above this one, if any.
    pub fn next(&self) -> Option<MembershipTier> {
        match self {
            MembershipTier::Iron => Some(MembershipTier::Silver),
            MembershipTier::Silver => Some(MembershipTier::Gold),
            MembershipTier::Gold => Some(MembershipTier::Diamond),
            MembershipTier::Diamond => None,
        }
    }

    /// Tier held at a given point balance.
    ///
    /// Thresholds are checked highest first; Iron starts at zero, so every
    /// balance maps to a tier.
    pub fn for_points(points: u64) -> MembershipTier {
        if points >= MembershipTier::Diamond.points_threshold() {
            MembershipTier::Diamond
        } else if points >= MembershipTier::Gold.points_threshold() {
            MembershipTier::Gold
        } else if points >= MembershipTier::Silver.points_threshold() {
            MembershipTier::Silver
        } else {
            MembershipTier::Iron
        }
    }
}

impl Default for MembershipTier {
    fn default() -> Self {
        MembershipTier::Iron
    }
}

// ─── Customer Profile ───────────────────────────────────────────────────────

/// Customer profile, linked one-to-one to a user account.
///
/// `loyalty_points` and `total_spent` are the stored state; the membership
/// tier is recomputed from the balance on demand. Persistence and
/// read-modify-write serialization belong to the owning service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub user_id: Uuid,
    pub phone_number: Option<String>,
    /// Current redeemable point balance.
    pub loyalty_points: u64,
    /// Running total of currency spent across all orders.
    pub total_spent: f64,
}

impl CustomerProfile {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            phone_number: None,
            loyalty_points: 0,
            total_spent: 0.0,
        }
    }

    /// Derived membership tier for the current balance.
    pub fn membership_tier(&self) -> MembershipTier {
        MembershipTier::for_points(self.loyalty_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MembershipTier::for_points(0), MembershipTier::Iron);
        assert_eq!(MembershipTier::for_points(999), MembershipTier::Iron);
        assert_eq!(MembershipTier::for_points(1000), MembershipTier::Silver);
        assert_eq!(MembershipTier::for_points(4999), MembershipTier::Silver);
        assert_eq!(MembershipTier::for_points(5000), MembershipTier::Gold);
        assert_eq!(MembershipTier::for_points(14999), MembershipTier::Gold);
        assert_eq!(MembershipTier::for_points(15000), MembershipTier::Diamond);
        assert_eq!(MembershipTier::for_points(999_999), MembershipTier::Diamond);
    }

    #[test]
    fn test_tier_ordering_matches_thresholds() {
        let tiers = [
            MembershipTier::Iron,
            MembershipTier::Silver,
            MembershipTier::Gold,
            MembershipTier::Diamond,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].points_threshold() < pair[1].points_threshold());
            assert!(pair[0].discount_percentage() < pair[1].discount_percentage());
            assert!(pair[0].points_multiplier() < pair[1].points_multiplier());
        }
    }

    #[test]
    fn test_next_tier_chain() {
        assert_eq!(MembershipTier::Iron.next(), Some(MembershipTier::Silver));
        assert_eq!(MembershipTier::Gold.next(), Some(MembershipTier::Diamond));
        assert_eq!(MembershipTier::Diamond.next(), None);
    }

    #[test]
    fn test_new_profile_starts_at_iron() {
        let profile = CustomerProfile::new(Uuid::new_v4());
        assert_eq!(profile.loyalty_points, 0);
        assert_eq!(profile.membership_tier(), MembershipTier::Iron);
    }
}
