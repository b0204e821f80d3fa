//! Promotion domain types — tenant-scoped discount campaigns with a
//! calendar validity window.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a promotion's `value` is interpreted when computing a discount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PromotionType {
    /// `value` is a percentage of the order amount (0-100 by convention,
    /// not enforced).
    Percentage,
    /// `value` is a flat currency amount, never exceeding the order amount.
    FixedAmount,
    /// Depends on order line composition; carries no amount-level
    /// arithmetic of its own.
    BuyOneGetOne,
}

/// A promotional offer. `code` is unique within a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub code: String,
    pub promotion_type: PromotionType,
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Promotion {
    /// Whether the promotion is active on `as_of`. Both ends of the window
    /// are inclusive.
    pub fn is_active_on(&self, as_of: NaiveDate) -> bool {
        self.start_date <= as_of && as_of <= self.end_date
    }

    /// Whether the promotion is active today.
    pub fn is_active(&self) -> bool {
        self.is_active_on(Utc::now().date_naive())
    }

    /// Whether the validity window had already closed on `as_of`.
    pub fn is_expired_on(&self, as_of: NaiveDate) -> bool {
        as_of > self.end_date
    }

    /// Whether the validity window has closed as of today.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    /// Data check mirroring the persistence-layer constraints: non-empty
    /// code, positive value, start strictly before end.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty() && self.value > 0.0 && self.start_date < self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january_promo() -> Promotion {
        Promotion {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            code: "JAN24".to_string(),
            promotion_type: PromotionType::Percentage,
            value: 10.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[test]
    fn test_activity_window_inclusive() {
        let promo = january_promo();
        assert!(promo.is_active_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(promo.is_active_on(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!promo.is_active_on(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
        assert!(!promo.is_active_on(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    #[test]
    fn test_expired_only_after_end_date() {
        let promo = january_promo();
        assert!(!promo.is_expired_on(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(promo.is_expired_on(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        // Not yet started is inactive but not expired.
        assert!(!promo.is_expired_on(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    }

    #[test]
    fn test_is_valid() {
        let promo = january_promo();
        assert!(promo.is_valid());

        let mut empty_code = january_promo();
        empty_code.code = String::new();
        assert!(!empty_code.is_valid());

        let mut inverted_window = january_promo();
        inverted_window.end_date = inverted_window.start_date;
        assert!(!inverted_window.is_valid());

        let mut zero_value = january_promo();
        zero_value.value = 0.0;
        assert!(!zero_value.is_valid());
    }
}
