//! Command output, as bare text or a JSON report.

use anyhow::{Context, Result};
use serde::Serialize;

/// Outcome of one command.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    /// Subcommand that produced the report.
    pub command: &'static str,
    /// Arguments as given.
    pub inputs: Vec<String>,
    /// Kind of the result, when it is a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Canonical text or number.
    pub result: String,
    /// Decoded fields, for `check` and `build`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<(String, i64)>,
}

impl Report {
    pub fn new(command: &'static str, inputs: &[&str], result: impl ToString) -> Self {
        Self {
            command,
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            kind: None,
            result: result.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl ToString) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: ToString,
    {
        self.fields = fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        self
    }

    /// Renders the report: pretty JSON, or the result followed by one
    /// `name = value` line per field.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string_pretty(self).context("failed to serialize report");
        }
        let mut out = self.result.clone();
        for (name, value) in &self.fields {
            out.push_str(&format!("\n{name} = {value}"));
        }
        Ok(out)
    }
}
