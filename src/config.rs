use crate::error::{BfResult, BidError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Names of every rate or constant the pricing engine reads.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum CostKey {
    ResinousMaterialCostPerSqft,
    SealedConcreteTubCost,
    SealedConcreteCoveragePerTub,
    GarageBackPorchCostPerSqft,
    NewConcreteCostPerSqft,
    LightCost,
    HoopCost,
    FenceCostPerFoot,
    NetCost,
    HourlyWage,
    MileageRate,
    LodgingCostPerDay,
    WorkdayHours,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostTable {
    // === MATERIALS ===
    #[arg(long, default_value_t = 6.0, value_parser = parse_non_negative)]
    pub resinous_material_cost_per_sqft: f64,
    #[arg(long, default_value_t = 800.0, value_parser = parse_non_negative)]
    pub sealed_concrete_tub_cost: f64,
    // Square feet covered by one tub of sealer
    #[arg(long, default_value_t = 11_000.0, value_parser = parse_non_negative)]
    pub sealed_concrete_coverage_per_tub: f64,
    #[arg(long, default_value_t = 5.0, value_parser = parse_non_negative)]
    pub garage_back_porch_cost_per_sqft: f64,
    #[arg(long, default_value_t = 6.25, value_parser = parse_non_negative)]
    pub new_concrete_cost_per_sqft: f64,

    // === COURT EQUIPMENT ===
    #[arg(long, default_value_t = 1500.0, value_parser = parse_non_negative)]
    pub light_cost: f64,
    #[arg(long, default_value_t = 2300.0, value_parser = parse_non_negative)]
    pub hoop_cost: f64,
    #[arg(long, default_value_t = 7.0, value_parser = parse_non_negative)]
    pub fence_cost_per_foot: f64,
    #[arg(long, default_value_t = 200.0, value_parser = parse_non_negative)]
    pub net_cost: f64,

    // === LABOR & TRAVEL ===
    #[arg(long, default_value_t = 30.0, value_parser = parse_non_negative)]
    pub hourly_wage: f64,
    #[arg(long, default_value_t = 0.58, value_parser = parse_non_negative)]
    pub mileage_rate: f64,
    #[arg(long, default_value_t = 150.0, value_parser = parse_non_negative)]
    pub lodging_cost_per_day: f64,
    #[arg(long, default_value_t = 8.0, value_parser = parse_non_negative)]
    pub workday_hours: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            resinous_material_cost_per_sqft: 6.0,
            sealed_concrete_tub_cost: 800.0,
            sealed_concrete_coverage_per_tub: 11_000.0,
            garage_back_porch_cost_per_sqft: 5.0,
            new_concrete_cost_per_sqft: 6.25,
            light_cost: 1500.0,
            hoop_cost: 2300.0,
            fence_cost_per_foot: 7.0,
            net_cost: 200.0,
            hourly_wage: 30.0,
            mileage_rate: 0.58,
            lodging_cost_per_day: 150.0,
            workday_hours: 8.0,
        }
    }
}

impl CostTable {
    fn slot_mut(&mut self, key: CostKey) -> &mut f64 {
        match key {
            CostKey::ResinousMaterialCostPerSqft => &mut self.resinous_material_cost_per_sqft,
            CostKey::SealedConcreteTubCost => &mut self.sealed_concrete_tub_cost,
            CostKey::SealedConcreteCoveragePerTub => &mut self.sealed_concrete_coverage_per_tub,
            CostKey::GarageBackPorchCostPerSqft => &mut self.garage_back_porch_cost_per_sqft,
            CostKey::NewConcreteCostPerSqft => &mut self.new_concrete_cost_per_sqft,
            CostKey::LightCost => &mut self.light_cost,
            CostKey::HoopCost => &mut self.hoop_cost,
            CostKey::FenceCostPerFoot => &mut self.fence_cost_per_foot,
            CostKey::NetCost => &mut self.net_cost,
            CostKey::HourlyWage => &mut self.hourly_wage,
            CostKey::MileageRate => &mut self.mileage_rate,
            CostKey::LodgingCostPerDay => &mut self.lodging_cost_per_day,
            CostKey::WorkdayHours => &mut self.workday_hours,
        }
    }

    pub fn get(&self, key: CostKey) -> f64 {
        match key {
            CostKey::ResinousMaterialCostPerSqft => self.resinous_material_cost_per_sqft,
            CostKey::SealedConcreteTubCost => self.sealed_concrete_tub_cost,
            CostKey::SealedConcreteCoveragePerTub => self.sealed_concrete_coverage_per_tub,
            CostKey::GarageBackPorchCostPerSqft => self.garage_back_porch_cost_per_sqft,
            CostKey::NewConcreteCostPerSqft => self.new_concrete_cost_per_sqft,
            CostKey::LightCost => self.light_cost,
            CostKey::HoopCost => self.hoop_cost,
            CostKey::FenceCostPerFoot => self.fence_cost_per_foot,
            CostKey::NetCost => self.net_cost,
            CostKey::HourlyWage => self.hourly_wage,
            CostKey::MileageRate => self.mileage_rate,
            CostKey::LodgingCostPerDay => self.lodging_cost_per_day,
            CostKey::WorkdayHours => self.workday_hours,
        }
    }

    /// Overwrites a single rate. Rates are never negative.
    pub fn set(&mut self, key: CostKey, value: f64) -> BfResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(BidError::Validation(format!(
                "{} must be a non-negative number, got {}",
                key, value
            )));
        }
        *self.slot_mut(key) = value;
        Ok(())
    }

    pub fn set_by_name(&mut self, name: &str, value: f64) -> BfResult<()> {
        let key = CostKey::from_str(name.trim())
            .map_err(|_| BidError::Config(format!("Unknown cost key '{}'", name.trim())))?;
        self.set(key, value)
    }

    /// All (key, value) pairs in declaration order.
    pub fn entries(&self) -> Vec<(CostKey, f64)> {
        CostKey::iter().map(|k| (k, self.get(k))).collect()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let content = fs::read_to_string(path)?;
        let table: CostTable = serde_json::from_str(&content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> BfResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> BfResult<()> {
        for (key, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(BidError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// Copies over only the rates the user actually typed on the command line,
    /// so a loaded table is not clobbered by clap defaults.
    pub fn merge_from_cli(&mut self, cli_costs: &CostTable, matches: &ArgMatches) {
        for key in CostKey::iter() {
            let id = key.to_string();
            if matches.value_source(&id) == Some(ValueSource::CommandLine) {
                *self.slot_mut(key) = cli_costs.get(key);
            }
        }
    }
}

/// Parses `key=value` pairs for `--set`.
pub fn parse_cost_override(s: &str) -> Result<(CostKey, f64), String> {
    let (name, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    let key = CostKey::from_str(name.trim()).map_err(|_| format!("unknown cost key '{}'", name))?;
    let value = parse_non_negative(raw).map_err(|e| format!("{}: {}", key, e))?;
    Ok((key, value))
}

/// Clap parser for rates and areas that may be zero but never negative.
pub fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s.trim()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be zero or greater", s.trim()));
    }
    Ok(value)
}
