use crate::error::{BfResult, BidError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
/// Serializes as the display label. Deserializing also takes the snake_case
/// slugs, but only `from_label` ignores case.
#[strum(ascii_case_insensitive)]
pub enum JobType {
    #[strum(to_string = "Resinous Flooring", serialize = "resinous_flooring")]
    #[serde(rename = "Resinous Flooring", alias = "resinous_flooring")]
    ResinousFlooring,

    #[strum(to_string = "Sealed Concrete", serialize = "sealed_concrete")]
    #[serde(rename = "Sealed Concrete", alias = "sealed_concrete")]
    SealedConcrete,

    #[strum(
        to_string = "Garage/Back Porch",
        serialize = "garage_back_porch",
        serialize = "garage_porch"
    )]
    #[serde(
        rename = "Garage/Back Porch",
        alias = "garage_back_porch",
        alias = "garage_porch"
    )]
    GaragePorch,

    #[strum(to_string = "Sports Courts", serialize = "sports_courts")]
    #[serde(rename = "Sports Courts", alias = "sports_courts")]
    SportsCourts,
}

impl JobType {
    /// Accepts the display label ("Sealed Concrete") or its snake_case slug.
    pub fn from_label(label: &str) -> BfResult<Self> {
        JobType::from_str(label.trim()).map_err(|_| BidError::InvalidJobType(label.to_string()))
    }

    pub fn all() -> Vec<JobType> {
        JobType::iter().collect()
    }
}

/// Checkbox selections collected for a sports court job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportsCourtOptions {
    pub wants_new_concrete: bool,
    pub is_pickleball: bool,
    pub is_basketball: bool,
    pub num_courts: u32,
    pub wants_net: bool,
    pub wants_fence: bool,
    pub wants_lights: bool,
    pub wants_hoop: bool,
}

impl Default for SportsCourtOptions {
    fn default() -> Self {
        Self {
            wants_new_concrete: false,
            is_pickleball: false,
            is_basketball: false,
            num_courts: 1,
            wants_net: false,
            wants_fence: false,
            wants_lights: false,
            wants_hoop: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub job_type: JobType,
    pub square_footage: f64,
    pub distance_miles: f64,
    pub profit_margin_percent: f64,
    pub num_workers: u32,
    #[serde(default)]
    pub sports_court_options: Option<SportsCourtOptions>,
}

impl JobRequest {
    pub fn new(
        job_type: JobType,
        square_footage: f64,
        distance_miles: f64,
        profit_margin_percent: f64,
        num_workers: u32,
    ) -> Self {
        Self {
            job_type,
            square_footage,
            distance_miles,
            profit_margin_percent,
            num_workers,
            sports_court_options: None,
        }
    }

    pub fn with_court_options(mut self, options: SportsCourtOptions) -> Self {
        self.sports_court_options = Some(options);
        self
    }
}
