use crate::error::ConfigError;
use crate::ui::types::choices::TallyChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A poll described as JSON: which method to tally with and the ballots.
///
/// ```json
/// { "tally": { "type": "trimmed-mean", "params": { "trim_fraction": 0.2 } },
///   "ballots": [18, 50, 19, 52, 30] }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PollConfig {
    #[serde(default)]
    #[schemars(title = "Tally method", description = "Defaults to the clustered mean.")]
    pub tally: TallyChoice,

    #[serde(default)]
    #[schemars(title = "Ballots", description = "Numeric ballots in submission order.")]
    pub ballots: Vec<f64>,
}

impl PollConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn schema() -> Schema {
        schema_for!(PollConfig)
    }
}
