use crate::reports;
use bidforge::api::BidSession;
use bidforge::config::{parse_cost_override, parse_non_negative, CostKey, CostTable};
use bidforge::error::BfResult;
use bidforge::jobs::{JobRequest, JobType, SportsCourtOptions};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub costs: CostTable,

    /// Job type label or slug, e.g. "Sports Courts" or sports_courts
    #[arg(short = 'j', long)]
    pub job_type: String,

    #[arg(short = 's', long, value_parser = parse_non_negative)]
    pub sqft: f64,

    /// Miles from the shop
    #[arg(long, default_value_t = 0.0, value_parser = parse_non_negative)]
    pub distance: f64,

    /// Profit margin in percent
    #[arg(short = 'm', long, default_value_t = 0.0, value_parser = parse_non_negative)]
    pub margin: f64,

    #[arg(short = 'w', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: u32,

    // === SPORTS COURTS ===
    #[arg(long, default_value_t = false)]
    pub new_concrete: bool,
    #[arg(long, default_value_t = false)]
    pub pickleball: bool,
    #[arg(long, default_value_t = false)]
    pub basketball: bool,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub courts: u32,
    #[arg(long, default_value_t = false)]
    pub net: bool,
    #[arg(long, default_value_t = false)]
    pub fence: bool,
    #[arg(long, default_value_t = false)]
    pub lights: bool,
    #[arg(long, default_value_t = false)]
    pub hoop: bool,

    /// Adjust a single rate, e.g. --set hourly_wage=35 (repeatable)
    #[arg(long = "set", value_parser = parse_cost_override)]
    pub overrides: Vec<(CostKey, f64)>,

    /// Print the rounded bid as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl QuoteArgs {
    fn court_options(&self) -> SportsCourtOptions {
        SportsCourtOptions {
            wants_new_concrete: self.new_concrete,
            is_pickleball: self.pickleball,
            is_basketball: self.basketball,
            num_courts: self.courts,
            wants_net: self.net,
            wants_fence: self.fence,
            wants_lights: self.lights,
            wants_hoop: self.hoop,
        }
    }

    fn to_request(&self) -> BfResult<JobRequest> {
        let job_type = JobType::from_label(&self.job_type)?;
        let request = JobRequest::new(job_type, self.sqft, self.distance, self.margin, self.workers);
        Ok(match job_type {
            JobType::SportsCourts => request.with_court_options(self.court_options()),
            _ => request,
        })
    }
}

pub fn run(args: QuoteArgs, costs: CostTable) -> BfResult<()> {
    let mut session = BidSession::with_costs(costs)?;
    session.apply_overrides(&args.overrides)?;

    let request = args.to_request()?;
    let bid = session.quote_request(&request)?.rounded();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bid)?);
    } else {
        reports::print_bid_summary(&bid);
    }
    Ok(())
}
