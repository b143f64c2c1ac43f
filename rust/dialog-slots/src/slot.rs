//! Parameter slot declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named parameter a request class needs filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSlot {
    /// Unique within the class schema; the key in the resolution map.
    pub name: String,

    /// Selects the type handler.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default = "required_by_default")]
    pub required: bool,

    /// Literal values this slot may take.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,

    /// Name of a registered supplier of current, authoritative values.
    #[serde(
        default,
        rename = "entityfunction",
        alias = "supplier",
        skip_serializing_if = "Option::is_none"
    )]
    pub supplier: Option<String>,

    /// Full prompt text used when asking for this slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Human-readable label substituted into generic prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn required_by_default() -> bool {
    true
}

impl ParameterSlot {
    /// A required slot with no values, supplier, prompt or title.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            required: true,
            values: None,
            supplier: None,
            prompt: None,
            title: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title, or the name when no title is declared.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// The declared values, or an empty list.
    pub fn static_values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.kind)?;
        if !self.required {
            write!(f, "?")?;
        }
        Ok(())
    }
}
