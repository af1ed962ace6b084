pub mod formulas;
pub mod types;

pub use self::formulas::BaseEstimate;
pub use self::types::{round_cents, AdditionalCosts, BidResult};

use crate::config::CostTable;
use crate::error::{BfResult, BidError};
use crate::jobs::{JobRequest, JobType, SportsCourtOptions};
use tracing::debug;

/// Jobs farther than this (exclusive) pay travel and lodging.
pub const LOCAL_SERVICE_RADIUS_MILES: f64 = 50.0;

/// Prices a job against the given cost table. Pure: the table is only read.
pub fn compute_bid(request: &JobRequest, costs: &CostTable) -> BfResult<BidResult> {
    if request.num_workers == 0 {
        return Err(BidError::InvalidCrewSize);
    }

    let base = formulas::formula_for(request.job_type)(request, costs)?;

    let labor_cost = base.labor_hours * costs.hourly_wage;
    let total_additional_costs = base.additional.total();
    let subtotal = base.material_cost + labor_cost + total_additional_costs;

    let (travel_cost, lodging_days, lodging_cost) =
        if request.distance_miles > LOCAL_SERVICE_RADIUS_MILES {
            travel_and_lodging(request, base.labor_hours, costs)?
        } else {
            (0.0, 0.0, 0.0)
        };

    let total_cost = subtotal + travel_cost + lodging_cost;
    let profit_multiplier = 1.0 + request.profit_margin_percent / 100.0;
    let bid_price = total_cost * profit_multiplier;

    debug!(
        job = %request.job_type,
        subtotal,
        travel_cost,
        lodging_cost,
        bid_price,
        "bid computed"
    );

    Ok(BidResult {
        job_type: request.job_type,
        square_footage: request.square_footage,
        workers_assigned: request.num_workers,
        material_cost: base.material_cost,
        labor_hours: base.labor_hours,
        labor_cost,
        additional_costs: base.additional,
        total_additional_costs,
        subtotal,
        travel_cost,
        lodging_days,
        lodging_cost,
        total_cost,
        profit_margin_percent: request.profit_margin_percent,
        bid_price,
    })
}

/// Same as [`compute_bid`] but takes the job type as a form label,
/// e.g. "Garage/Back Porch".
pub fn compute_bid_for_label(
    job_type: &str,
    square_footage: f64,
    distance_miles: f64,
    profit_margin_percent: f64,
    num_workers: u32,
    sports_court_options: Option<SportsCourtOptions>,
    costs: &CostTable,
) -> BfResult<BidResult> {
    let job_type = JobType::from_label(job_type)?;
    let request = JobRequest {
        job_type,
        square_footage,
        distance_miles,
        profit_margin_percent,
        num_workers,
        sports_court_options,
    };
    compute_bid(&request, costs)
}

// Round-trip mileage plus fractional lodging days for the crew.
fn travel_and_lodging(
    request: &JobRequest,
    labor_hours: f64,
    costs: &CostTable,
) -> BfResult<(f64, f64, f64)> {
    if costs.workday_hours <= 0.0 {
        return Err(BidError::Validation(
            "workday_hours must be greater than 0 to price lodging".to_string(),
        ));
    }

    let travel_cost = request.distance_miles * costs.mileage_rate * 2.0;
    let crew_hours_per_day = f64::from(request.num_workers) * costs.workday_hours;
    let lodging_days = labor_hours / crew_hours_per_day;
    let lodging_cost = lodging_days * costs.lodging_cost_per_day;

    debug!(
        distance = request.distance_miles,
        lodging_days, "job outside local service radius"
    );

    Ok((travel_cost, lodging_days, lodging_cost))
}
