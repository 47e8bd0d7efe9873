//! Non-fatal checks over the source stage graph.
//!
//! Conversion trusts `refId` uniqueness and never looks for cycles. These rules
//! point out what the converter silently accepted so the template owner can fix
//! it by hand.

use crate::core::pipeline_config::SourceStage;
use std::fmt;

pub mod rules;
pub use rules::*;

/// Diagnostic severity levels emitted by stage lint rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    Warning,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Warning => write!(f, "Warning"),
        }
    }
}

/// Individual lint result emitted by a rule.
#[derive(Debug, Clone)]
pub struct LintResult {
    pub code: String,
    pub severity: LintSeverity,
    pub message: String,
    pub location: Option<String>,
    pub suggestion: Option<String>,
}

impl LintResult {
    pub fn new(
        code: impl Into<String>,
        severity: LintSeverity,
        message: impl Into<String>,
        location: Option<String>,
        suggestion: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            severity,
            message: message.into(),
            location,
            suggestion,
        }
    }
}

impl fmt::Display for LintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

pub trait StageLintRule {
    fn validate(&self, stages: &[SourceStage<'_>]) -> Vec<LintResult>;
}

/// Run every built-in rule in order and concatenate their findings.
pub fn lint_stages(stages: &[SourceStage<'_>]) -> Vec<LintResult> {
    built_in_rules()
        .iter()
        .flat_map(|rule| rule.validate(stages))
        .collect()
}

/// Emit lint results as tracing warnings.
pub fn log_results(results: &[LintResult]) {
    for result in results {
        tracing::warn!(
            code = %result.code,
            severity = %result.severity,
            location = result.location.as_deref().unwrap_or("-"),
            suggestion = result.suggestion.as_deref().unwrap_or("-"),
            "{}",
            result.message
        );
    }
}
