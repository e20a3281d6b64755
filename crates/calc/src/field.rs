use serde::{Deserialize, Serialize};

use crate::value::{CellValue, ValueGrid};

/// A named input slot in a calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Ref name, e.g. `iName` (serialized as `ref`).
    #[serde(rename = "ref")]
    pub name: String,
    #[serde(default)]
    pub value: ValueGrid,
}

impl InputField {
    /// Single-cell text input.
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ValueGrid::from_scalar(CellValue::Text(value.into())),
        }
    }
}

/// A named output slot in a calculation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputField {
    #[serde(rename = "ref")]
    pub name: String,
    #[serde(default)]
    pub value: ValueGrid,
}

impl OutputField {
    /// Output slot with an empty 1×1 grid.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ValueGrid::from_scalar(CellValue::Empty),
        }
    }
}

/// The request that was sent to the calculation engine.
///
/// Hooks receive this by shared reference: the request is owned by the
/// host and is never mutated by a hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub inputs: Vec<InputField>,
}

impl CalculationRequest {
    /// First input with the given ref name. Absence is not an error;
    /// callers treat a missing field as an empty value.
    pub fn input(&self, name: &str) -> Option<&InputField> {
        self.inputs.iter().find(|f| f.name == name)
    }
}

/// The response that came back from the calculation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    #[serde(default)]
    pub outputs: Vec<OutputField>,
}

impl CalculationResponse {
    pub fn output(&self, name: &str) -> Option<&OutputField> {
        self.outputs.iter().find(|f| f.name == name)
    }

    pub fn output_mut(&mut self, name: &str) -> Option<&mut OutputField> {
        self.outputs.iter_mut().find(|f| f.name == name)
    }
}
