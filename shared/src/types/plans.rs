//! Subscription plan tiers and their limits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanTier {
    FreeTrial,
    Starter,
    Growth,
    TenantflowMax,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::FreeTrial => "FREE_TRIAL",
            PlanTier::Starter => "STARTER",
            PlanTier::Growth => "GROWTH",
            PlanTier::TenantflowMax => "TENANTFLOW_MAX",
        }
    }

    /// Pricing and limits for this tier
    pub fn plan(&self) -> &'static PricingPlan {
        plan_for(*self)
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static pricing entry. Limits of `None` mean unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub tier: PlanTier,
    pub name: &'static str,
    pub monthly_price_cents: u64,
    pub annual_price_cents: u64,
    pub property_limit: Option<u32>,
    pub unit_limit: Option<u32>,
    pub trial_days: u32,
}

impl PricingPlan {
    pub fn allows_properties(&self, count: u32) -> bool {
        self.property_limit.map_or(true, |limit| count <= limit)
    }

    pub fn allows_units(&self, count: u32) -> bool {
        self.unit_limit.map_or(true, |limit| count <= limit)
    }

    /// What a year of monthly billing costs over the annual price
    pub fn annual_savings_cents(&self) -> u64 {
        (self.monthly_price_cents * 12).saturating_sub(self.annual_price_cents)
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price_cents == 0
    }
}

pub static PRICING_PLANS: [PricingPlan; 4] = [
    PricingPlan {
        tier: PlanTier::FreeTrial,
        name: "Free Trial",
        monthly_price_cents: 0,
        annual_price_cents: 0,
        property_limit: Some(1),
        unit_limit: Some(5),
        trial_days: 14,
    },
    PricingPlan {
        tier: PlanTier::Starter,
        name: "Starter",
        monthly_price_cents: 2_900,
        annual_price_cents: 29_000,
        property_limit: Some(5),
        unit_limit: Some(25),
        trial_days: 0,
    },
    PricingPlan {
        tier: PlanTier::Growth,
        name: "Growth",
        monthly_price_cents: 7_900,
        annual_price_cents: 79_000,
        property_limit: Some(20),
        unit_limit: Some(100),
        trial_days: 0,
    },
    PricingPlan {
        tier: PlanTier::TenantflowMax,
        name: "TenantFlow Max",
        monthly_price_cents: 19_900,
        annual_price_cents: 199_000,
        property_limit: None,
        unit_limit: None,
        trial_days: 0,
    },
];

pub fn plan_for(tier: PlanTier) -> &'static PricingPlan {
    match tier {
        PlanTier::FreeTrial => &PRICING_PLANS[0],
        PlanTier::Starter => &PRICING_PLANS[1],
        PlanTier::Growth => &PRICING_PLANS[2],
        PlanTier::TenantflowMax => &PRICING_PLANS[3],
    }
}

/// Cheapest tier whose limits cover the given portfolio
pub fn smallest_plan_for(properties: u32, units: u32) -> PlanTier {
    PRICING_PLANS
        .iter()
        .filter(|plan| !plan.is_free())
        .find(|plan| plan.allows_properties(properties) && plan.allows_units(units))
        .map(|plan| plan.tier)
        .unwrap_or(PlanTier::TenantflowMax)
}
