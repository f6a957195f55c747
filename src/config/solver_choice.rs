use crate::classifiers::NearestCentroid;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NearestCentroidParameters {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SolverKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SolverChoice {
    #[strum_discriminants(strum(
        message = "Nearest Centroid",
        detailed_message = "Kernel nearest-class-mean classifier; deterministic."
    ))]
    NearestCentroid(NearestCentroidParameters),
}

impl Default for SolverChoice {
    fn default() -> Self {
        SolverChoice::NearestCentroid(NearestCentroidParameters::default())
    }
}

impl From<NearestCentroidParameters> for NearestCentroid {
    fn from(_: NearestCentroidParameters) -> Self {
        NearestCentroid
    }
}

impl SolverChoice {
    pub fn build(self) -> NearestCentroid {
        match self {
            SolverChoice::NearestCentroid(p) => p.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use strum::EnumMessage;

    #[test]
    fn tagged_enum_serialization() {
        let v = serde_json::to_value(SolverChoice::default()).unwrap();
        assert_eq!(
            v.get("type").and_then(Value::as_str),
            Some("nearest-centroid")
        );
        assert!(v.get("params").and_then(Value::as_object).is_some());
    }

    #[test]
    fn deserializes_from_kebab_case_tag() {
        let c: SolverChoice =
            serde_json::from_value(json!({ "type": "nearest-centroid", "params": {} })).unwrap();
        assert_eq!(c, SolverChoice::default());
    }

    #[test]
    fn discriminant_messages_available() {
        assert_eq!(SolverKind::NearestCentroid.get_message(), Some("Nearest Centroid"));
        assert_eq!(SolverKind::NearestCentroid.to_string(), "nearest-centroid");
    }
}
