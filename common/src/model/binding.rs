use serde::{Deserialize, Serialize};

/// The only expression language ad-hoc invocations are written in.
pub const EXPRESSION_LANGUAGE: &str = "spel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub language: String,
    /// The expression text. Serialized as `expression` to match the backend.
    #[serde(rename = "expression")]
    pub body: String,
}

impl Expression {
    pub fn empty() -> Self {
        Self {
            language: EXPRESSION_LANGUAGE.to_string(),
            body: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBinding {
    pub name: String,
    pub expression: Expression,
}
