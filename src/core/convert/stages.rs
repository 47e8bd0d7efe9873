use crate::core::error::AppError;
use crate::core::pipeline_config::SourceStage;
use crate::core::template::TemplateStage;
use serde_json::{Map, Value};

/// Source fields that become part of the stage record itself and are kept out of `config`.
pub const STRUCTURAL_STAGE_FIELDS: [&str; 4] = ["type", "name", "refId", "requisiteStageRefIds"];

/// Template stage id: the stage type followed by its source `refId`.
pub fn stage_id(stage_type: &str, ref_id: &str) -> String {
    format!("{}{}", stage_type, ref_id)
}

/// Convert every stage, in source order, resolving `requisiteStageRefIds` to template ids.
///
/// Stages are not reordered; dependency edges are recorded through `dependsOn` only.
pub fn convert_stages(stages: &[SourceStage<'_>]) -> Result<Vec<TemplateStage>, AppError> {
    stages
        .iter()
        .map(|stage| -> Result<TemplateStage, AppError> {
            let id = stage_id(stage.stage_type, stage.ref_id);
            let depends_on = stage
                .requisite_ref_ids
                .iter()
                .map(|ref_id| {
                    resolve_reference(stages, ref_id)
                        .ok_or_else(|| AppError::unresolved_stage(&id, ref_id))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(TemplateStage {
                depends_on,
                stage_type: stage.stage_type.to_string(),
                name: stage.name.to_string(),
                config: scrub_stage_config(stage.raw()),
                id,
            })
        })
        .collect()
}

// First match wins; refId uniqueness is not enforced here.
fn resolve_reference(stages: &[SourceStage<'_>], ref_id: &str) -> Option<String> {
    stages
        .iter()
        .find(|candidate| candidate.ref_id == ref_id)
        .map(|target| stage_id(target.stage_type, target.ref_id))
}

/// Copy of a stage object without its structural fields. Remaining keys keep their order.
pub fn scrub_stage_config(stage: &Map<String, Value>) -> Map<String, Value> {
    stage
        .iter()
        .filter(|(key, _)| !STRUCTURAL_STAGE_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
