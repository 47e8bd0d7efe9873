#![allow(clippy::result_large_err)]

//! Pure conversion from a Spinnaker pipeline config to a pipeline template.

use crate::core::error::AppError;
use crate::core::pipeline_config::PipelineConfig;
use crate::core::template::{
    ConcurrentExecutions, PipelineTemplate, TemplateConfiguration, TemplateMetadata,
    GENERATED_TEMPLATE_ID, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_NAME, TEMPLATE_SCHEMA,
};
use serde_json::Value;

mod naming;
mod stages;

pub use naming::{convert_notifications, convert_triggers};
pub use stages::{convert_stages, scrub_stage_config, stage_id, STRUCTURAL_STAGE_FIELDS};

/// Build a template from a pipeline config.
///
/// The source document is only borrowed; every substructure in the result is a
/// fresh copy, so callers can keep inspecting `source` afterwards.
pub fn convert(source: &Value) -> Result<PipelineTemplate, AppError> {
    let config = PipelineConfig::new(source)?;

    let metadata = TemplateMetadata {
        name: config
            .optional_str("name")?
            .unwrap_or(PLACEHOLDER_NAME)
            .to_string(),
        description: config
            .optional_str("description")?
            .unwrap_or(PLACEHOLDER_DESCRIPTION)
            .to_string(),
        owner: config.required_str("lastModifiedBy")?.to_string(),
        scopes: Vec::new(),
    };

    let configuration = TemplateConfiguration {
        concurrent_executions: ConcurrentExecutions {
            parallel: config.required("parallel")?.clone(),
            limit_concurrent: config.required("limitConcurrent")?.clone(),
        },
        triggers: convert_triggers(config.optional_array("triggers")?)?,
        parameters: config.optional_array("parameterConfig")?.to_vec(),
        notifications: convert_notifications(config.optional_array("notifications")?)?,
    };

    let stages = convert_stages(&config.stages()?)?;

    tracing::debug!(
        stages = stages.len(),
        triggers = configuration.triggers.len(),
        notifications = configuration.notifications.len(),
        "converted pipeline config"
    );

    Ok(PipelineTemplate {
        schema: TEMPLATE_SCHEMA.to_string(),
        id: GENERATED_TEMPLATE_ID.to_string(),
        metadata,
        protect: false,
        configuration,
        variables: Vec::new(),
        stages,
    })
}
