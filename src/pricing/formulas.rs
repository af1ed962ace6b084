use super::types::AdditionalCosts;
use crate::config::CostTable;
use crate::error::{BfResult, BidError};
use crate::jobs::{JobRequest, JobType};

/// Job-type specific part of a bid, before labor pricing and travel.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BaseEstimate {
    pub material_cost: f64,
    pub labor_hours: f64,
    pub additional: AdditionalCosts,
}

pub type Formula = fn(&JobRequest, &CostTable) -> BfResult<BaseEstimate>;

// Fixed crew productivity, square feet per labor hour
pub const RESINOUS_SQFT_PER_HOUR: f64 = 8.0;
pub const SEALED_CONCRETE_SQFT_PER_HOUR: f64 = 250.0;
// Flat-rate jobs take four full workdays regardless of area
pub const FLAT_RATE_WORKDAYS: f64 = 4.0;
pub const LIGHTS_PER_COURT: f64 = 2.0;

pub fn formula_for(job_type: JobType) -> Formula {
    match job_type {
        JobType::ResinousFlooring => resinous_flooring,
        JobType::SealedConcrete => sealed_concrete,
        JobType::GaragePorch => garage_porch,
        JobType::SportsCourts => sports_courts,
    }
}

pub fn resinous_flooring(req: &JobRequest, c: &CostTable) -> BfResult<BaseEstimate> {
    Ok(BaseEstimate {
        material_cost: c.resinous_material_cost_per_sqft * req.square_footage,
        labor_hours: req.square_footage / RESINOUS_SQFT_PER_HOUR,
        additional: AdditionalCosts::default(),
    })
}

pub fn sealed_concrete(req: &JobRequest, c: &CostTable) -> BfResult<BaseEstimate> {
    if c.sealed_concrete_coverage_per_tub <= 0.0 {
        return Err(BidError::Validation(
            "sealed_concrete_coverage_per_tub must be greater than 0".to_string(),
        ));
    }
    let tubs = req.square_footage / c.sealed_concrete_coverage_per_tub;
    Ok(BaseEstimate {
        material_cost: tubs * c.sealed_concrete_tub_cost,
        labor_hours: req.square_footage / SEALED_CONCRETE_SQFT_PER_HOUR,
        additional: AdditionalCosts::default(),
    })
}

pub fn garage_porch(req: &JobRequest, c: &CostTable) -> BfResult<BaseEstimate> {
    Ok(BaseEstimate {
        material_cost: c.garage_back_porch_cost_per_sqft * req.square_footage,
        labor_hours: c.workday_hours * FLAT_RATE_WORKDAYS,
        additional: AdditionalCosts::default(),
    })
}

pub fn sports_courts(req: &JobRequest, c: &CostTable) -> BfResult<BaseEstimate> {
    let opts = req
        .sports_court_options
        .as_ref()
        .ok_or(BidError::MissingCourtOptions)?;
    if opts.num_courts == 0 {
        return Err(BidError::Validation(
            "Number of courts must be at least 1".to_string(),
        ));
    }

    let material_cost = if opts.wants_new_concrete {
        c.new_concrete_cost_per_sqft * req.square_footage
    } else {
        0.0
    };

    let courts = f64::from(opts.num_courts);
    let mut additional = AdditionalCosts::default();

    if opts.is_pickleball || opts.is_basketball {
        if opts.wants_net {
            additional.net_cost += c.net_cost * courts;
        }
        // Square footage stands in for fence length.
        if opts.wants_fence {
            additional.fence_cost += c.fence_cost_per_foot * req.square_footage;
        }
        if opts.wants_lights {
            additional.light_cost += c.light_cost * LIGHTS_PER_COURT * courts;
        }
        if opts.is_basketball && opts.wants_hoop {
            additional.hoop_cost += c.hoop_cost * courts;
        }
    }

    Ok(BaseEstimate {
        material_cost,
        labor_hours: c.workday_hours * FLAT_RATE_WORKDAYS,
        additional,
    })
}
