//! Declarative pipeline template produced by the converter.
//!
//! Field declaration order is the rendered key order. Open payloads use
//! `serde_json::Map`, which keeps insertion order with the `preserve_order`
//! feature, so no container in this tree is ever re-sorted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TEMPLATE_SCHEMA: &str = "1";
pub const GENERATED_TEMPLATE_ID: &str = "generatedTemplate";
pub const PLACEHOLDER_NAME: &str = "GIVE ME A NAME";
pub const PLACEHOLDER_DESCRIPTION: &str = "GIVE ME A DESCRIPTION";

/// Root template document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTemplate {
    pub schema: String,
    pub id: String,
    pub metadata: TemplateMetadata,
    pub protect: bool,
    pub configuration: TemplateConfiguration,
    pub variables: Vec<Value>,
    pub stages: Vec<TemplateStage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfiguration {
    pub concurrent_executions: ConcurrentExecutions,
    pub triggers: Vec<Value>,
    pub parameters: Vec<Value>,
    pub notifications: Vec<Value>,
}

/// Concurrency flags copied as-is from the source config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcurrentExecutions {
    pub parallel: Value,
    pub limit_concurrent: Value,
}

/// A normalized stage. `config` holds every source field except the structural ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStage {
    pub id: String,
    #[serde(rename = "type")]
    pub stage_type: String,
    pub depends_on: Vec<String>,
    pub name: String,
    pub config: Map<String, Value>,
}

impl PipelineTemplate {
    pub fn stage(&self, id: &str) -> Option<&TemplateStage> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    pub fn stage_ids(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|stage| stage.id.as_str())
    }
}
