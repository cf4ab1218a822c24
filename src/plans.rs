//! Subscription plans

use serde::Serialize;

/// A subscription duration choice for subscription products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanOption {
    /// Short id, e.g. `"3"`.
    pub id: &'static str,

    /// Human-readable label, e.g. `"3 Months"`.
    pub label: &'static str,

    /// Stable value carried on cart items, e.g. `"3-months"`.
    pub value: &'static str,
}

/// The fixed set of subscription durations offered by the storefront.
pub const PLAN_OPTIONS: [PlanOption; 3] = [
    PlanOption {
        id: "3",
        label: "3 Months",
        value: "3-months",
    },
    PlanOption {
        id: "6",
        label: "6 Months",
        value: "6-months",
    },
    PlanOption {
        id: "12",
        label: "12 Months",
        value: "12-months",
    },
];

/// Look up the display label for a plan value.
pub fn plan_label(value: &str) -> Option<&'static str> {
    PLAN_OPTIONS
        .iter()
        .find(|plan| plan.value == value)
        .map(|plan| plan.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_for_known_plan() {
        assert_eq!(plan_label("3-months"), Some("3 Months"));
        assert_eq!(plan_label("12-months"), Some("12 Months"));
    }

    #[test]
    fn label_for_unknown_plan_is_none() {
        assert_eq!(plan_label("lifetime"), None);
    }
}
