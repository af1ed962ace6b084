use crate::reports;
use bidforge::api::BidSession;
use bidforge::config::{parse_cost_override, CostKey, CostTable};
use bidforge::error::BfResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CostsArgs {
    #[command(flatten)]
    pub costs: CostTable,

    #[arg(long = "set", value_parser = parse_cost_override)]
    pub overrides: Vec<(CostKey, f64)>,

    /// Write the effective table to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CostsArgs, costs: CostTable) -> BfResult<()> {
    let mut session = BidSession::with_costs(costs)?;
    session.apply_overrides(&args.overrides)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.costs())?);
    } else {
        reports::print_cost_table(session.costs());
    }

    if let Some(path) = &args.export {
        session.costs().save_to_file(path)?;
        info!("💾 Cost table written to {}", path.display());
    }
    Ok(())
}
