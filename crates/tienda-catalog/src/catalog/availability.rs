//! Availability classification.
//!
//! Availability is derived state: it is recomputed from `sizes` and
//! `on_order` on every use and never persisted, so the sort path and the
//! filter path can never disagree.

use crate::catalog::SizeVariant;
use serde::{Deserialize, Serialize};

/// How quickly a product can be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// Stocked variants exist and the product ships from ready stock.
    Immediate,
    /// Stocked variants exist but the product is sourced per order.
    ShortWait,
    /// No stocked variants, regardless of the on-order flag.
    LongWait,
}

impl Availability {
    /// Classify a product from its size list and on-order flag.
    pub fn classify(sizes: &[SizeVariant], on_order: bool) -> Self {
        if sizes.is_empty() {
            Availability::LongWait
        } else if on_order {
            Availability::ShortWait
        } else {
            Availability::Immediate
        }
    }

    /// Sort ordinal: immediately-available items rank first.
    pub fn rank(&self) -> u8 {
        match self {
            Availability::Immediate => 0,
            Availability::ShortWait => 1,
            Availability::LongWait => 2,
        }
    }

    /// The user-facing label shown in the filter UI.
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Immediate => "Immediate delivery",
            Availability::ShortWait => "Short wait",
            Availability::LongWait => "Long wait",
        }
    }

    /// Parse a user-facing label. Returns `None` for anything but the three
    /// exact labels; callers treat that as "no availability filter".
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Immediate delivery" => Some(Availability::Immediate),
            "Short wait" => Some(Availability::ShortWait),
            "Long wait" => Some(Availability::LongWait),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(labels: &[&str]) -> Vec<SizeVariant> {
        labels.iter().map(|s| SizeVariant::new(*s, 0.0)).collect()
    }

    #[test]
    fn test_classification_table() {
        assert_eq!(
            Availability::classify(&sizes(&["M"]), false),
            Availability::Immediate
        );
        assert_eq!(
            Availability::classify(&sizes(&["M"]), true),
            Availability::ShortWait
        );
        assert_eq!(Availability::classify(&[], false), Availability::LongWait);
        // Empty sizes win over the on-order flag.
        assert_eq!(Availability::classify(&[], true), Availability::LongWait);
    }

    #[test]
    fn test_rank_orders_immediate_first() {
        assert!(Availability::Immediate.rank() < Availability::ShortWait.rank());
        assert!(Availability::ShortWait.rank() < Availability::LongWait.rank());
    }

    #[test]
    fn test_label_round_trip() {
        for a in [
            Availability::Immediate,
            Availability::ShortWait,
            Availability::LongWait,
        ] {
            assert_eq!(Availability::from_label(a.label()), Some(a));
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(Availability::from_label("immediate delivery"), None);
        assert_eq!(Availability::from_label("In stock"), None);
        assert_eq!(Availability::from_label(""), None);
    }
}
