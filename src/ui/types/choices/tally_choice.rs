use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_trim_fraction() -> f64 {
    0.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TallyKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TallyChoice {
    #[strum_discriminants(strum(
        message = "Clustered Mean",
        detailed_message = "Mean of the first cluster of close ballots to reach a majority."
    ))]
    ClusteredMean,

    #[strum_discriminants(strum(
        message = "Mean",
        detailed_message = "Arithmetic mean of every ballot."
    ))]
    Mean,

    #[strum_discriminants(strum(
        message = "Median",
        detailed_message = "Middle ballot (average of the two middle ballots for even counts)."
    ))]
    Median,

    #[strum_discriminants(strum(
        message = "Trimmed Mean",
        detailed_message = "Mean after dropping a fraction of ballots from each end."
    ))]
    TrimmedMean(TrimmedMeanParameters),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrimmedMeanParameters {
    #[serde(default = "default_trim_fraction")]
    #[schemars(
        title = "Trim fraction",
        description = "Fraction of ballots dropped from each end, in [0, 0.5).",
        default = "default_trim_fraction"
    )]
    pub trim_fraction: f64,
}

impl Default for TrimmedMeanParameters {
    fn default() -> Self {
        Self {
            trim_fraction: default_trim_fraction(),
        }
    }
}

impl Default for TallyChoice {
    fn default() -> Self {
        TallyChoice::ClusteredMean
    }
}

impl TallyChoice {
    pub fn kind(&self) -> TallyKind {
        self.into()
    }

    /// The choice for `kind` with default params.
    pub fn from_kind(kind: TallyKind) -> Self {
        match kind {
            TallyKind::ClusteredMean => TallyChoice::ClusteredMean,
            TallyKind::Mean => TallyChoice::Mean,
            TallyKind::Median => TallyChoice::Median,
            TallyKind::TrimmedMean => TallyChoice::TrimmedMean(TrimmedMeanParameters::default()),
        }
    }
}

impl UIChoice for TallyChoice {
    type Kind = TallyKind;

    fn schema() -> Schema {
        schema_for!(TallyChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a tally method:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TallyKind::TrimmedMean => {
                serde_json::to_value(TrimmedMeanParameters::default()).unwrap_or(Value::Null)
            }
            _ => Value::Null,
        }
    }
}
