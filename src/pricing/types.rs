use crate::jobs::JobType;
use serde::Serialize;

/// Sports court accessory buckets. Each is zero unless its option applies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct AdditionalCosts {
    pub fence_cost: f64,
    pub light_cost: f64,
    pub hoop_cost: f64,
    pub net_cost: f64,
}

impl AdditionalCosts {
    pub fn total(&self) -> f64 {
        self.fence_cost + self.light_cost + self.hoop_cost + self.net_cost
    }

    fn rounded(&self) -> Self {
        Self {
            fence_cost: round_cents(self.fence_cost),
            light_cost: round_cents(self.light_cost),
            hoop_cost: round_cents(self.hoop_cost),
            net_cost: round_cents(self.net_cost),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BidResult {
    // Echoed job metadata
    pub job_type: JobType,
    pub square_footage: f64,
    pub workers_assigned: u32,

    // Base costs
    pub material_cost: f64,
    pub labor_hours: f64,
    pub labor_cost: f64,

    // Court accessories
    pub additional_costs: AdditionalCosts,
    pub total_additional_costs: f64,
    pub subtotal: f64,

    // Out-of-radius jobs only
    pub travel_cost: f64,
    pub lodging_days: f64,
    pub lodging_cost: f64,

    pub total_cost: f64,
    pub profit_margin_percent: f64,
    pub bid_price: f64,
}

impl BidResult {
    /// Copy with every derived figure rounded to 2 decimals for display.
    pub fn rounded(&self) -> Self {
        Self {
            material_cost: round_cents(self.material_cost),
            labor_hours: round_cents(self.labor_hours),
            labor_cost: round_cents(self.labor_cost),
            additional_costs: self.additional_costs.rounded(),
            total_additional_costs: round_cents(self.total_additional_costs),
            subtotal: round_cents(self.subtotal),
            travel_cost: round_cents(self.travel_cost),
            lodging_days: round_cents(self.lodging_days),
            lodging_cost: round_cents(self.lodging_cost),
            total_cost: round_cents(self.total_cost),
            bid_price: round_cents(self.bid_price),
            ..*self
        }
    }

    pub fn profit_amount(&self) -> f64 {
        self.bid_price - self.total_cost
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
