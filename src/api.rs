use crate::config::{CostKey, CostTable};
use crate::error::BfResult;
use crate::jobs::{JobRequest, JobType, SportsCourtOptions};
use crate::pricing::{self, BidResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Form submission as a UI collects it. The job type stays a label until the
/// engine is called, so unknown selections surface as `InvalidJobType`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub job_type: String,
    pub square_footage: f64,
    pub distance_miles: f64,
    pub profit_margin_percent: f64,
    pub num_workers: u32,
    #[serde(default)]
    pub sports_court_options: Option<SportsCourtOptions>,
}

impl QuoteForm {
    pub fn into_request(self) -> BfResult<JobRequest> {
        let job_type = JobType::from_label(&self.job_type)?;
        // Court checkboxes only matter for court jobs.
        let sports_court_options = match job_type {
            JobType::SportsCourts => self.sports_court_options,
            _ => None,
        };
        Ok(JobRequest {
            job_type,
            square_footage: self.square_footage,
            distance_miles: self.distance_miles,
            profit_margin_percent: self.profit_margin_percent,
            num_workers: self.num_workers,
            sports_court_options,
        })
    }
}

/// One user's pricing session: a private cost table they may adjust before
/// asking for quotes.
#[derive(Debug, Clone, Default)]
pub struct BidSession {
    costs: CostTable,
}

impl BidSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from a caller-built table. Rejects negative or
    /// non-finite rates.
    pub fn with_costs(costs: CostTable) -> BfResult<Self> {
        costs.validate()?;
        Ok(Self { costs })
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn adjust_cost(&mut self, name: &str, value: f64) -> BfResult<()> {
        self.costs.set_by_name(name, value)?;
        info!("API: {} set to {}", name.trim(), value);
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &[(CostKey, f64)]) -> BfResult<()> {
        for &(key, value) in overrides {
            self.costs.set(key, value)?;
        }
        Ok(())
    }

    pub fn reset_costs(&mut self) {
        self.costs = CostTable::default();
    }

    pub fn quote(&self, form: &QuoteForm) -> BfResult<BidResult> {
        let request = form.clone().into_request()?;
        pricing::compute_bid(&request, &self.costs)
    }

    pub fn quote_request(&self, request: &JobRequest) -> BfResult<BidResult> {
        pricing::compute_bid(request, &self.costs)
    }
}
