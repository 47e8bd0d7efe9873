use serde_json::{json, Value};
use spin_dcd_converter::core::lint::{lint_stages, LintSeverity};
use spin_dcd_converter::core::pipeline_config::PipelineConfig;

fn lint(stages: Value) -> Vec<(String, Option<String>, String)> {
    let doc = json!({ "stages": stages });
    let config = PipelineConfig::new(&doc).expect("object");
    let parsed = config.stages().expect("stages");
    lint_stages(&parsed)
        .into_iter()
        .inspect(|result| assert_eq!(result.severity, LintSeverity::Warning))
        .map(|result| (result.code, result.location, result.message))
        .collect()
}

#[test]
fn fixture_pipeline_is_clean() {
    let source: Value = serde_json::from_str(include_str!("../fixtures/pipeline_config.json"))
        .expect("fixture json");
    let stages = PipelineConfig::new(&source).unwrap().stages().unwrap();
    assert!(lint_stages(&stages).is_empty());
}

#[test]
fn duplicate_ref_ids_are_reported_once() {
    let results = lint(json!([
        { "type": "bake", "refId": "1", "name": "Bake" },
        { "type": "wait", "refId": "1", "name": "Wait" },
        { "type": "wait", "refId": "1", "name": "Wait again" }
    ]));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0, "DCD-LINT-001");
    assert_eq!(results[0].1.as_deref(), Some("stages[1]"));
    assert!(results[0].2.contains("used by 3 stages"));
}

#[test]
fn two_stage_cycle_is_reported() {
    let results = lint(json!([
        { "type": "wait", "refId": "1", "name": "One", "requisiteStageRefIds": ["2"] },
        { "type": "wait", "refId": "2", "name": "Two", "requisiteStageRefIds": ["1"] },
        { "type": "deploy", "refId": "3", "name": "Three", "requisiteStageRefIds": ["2"] }
    ]));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0, "DCD-LINT-003");
    assert_eq!(
        results[0].2,
        "dependency cycle between stages: wait1, wait2"
    );
}

#[test]
fn separate_cycles_are_reported_in_source_order() {
    let results = lint(json!([
        { "type": "a", "refId": "1", "name": "A", "requisiteStageRefIds": ["2"] },
        { "type": "b", "refId": "2", "name": "B", "requisiteStageRefIds": ["1"] },
        { "type": "c", "refId": "3", "name": "C", "requisiteStageRefIds": ["5"] },
        { "type": "d", "refId": "4", "name": "D", "requisiteStageRefIds": ["3"] },
        { "type": "e", "refId": "5", "name": "E", "requisiteStageRefIds": ["4"] }
    ]));
    let locations: Vec<Option<&str>> = results.iter().map(|r| r.1.as_deref()).collect();
    assert_eq!(locations, vec![Some("stages[0]"), Some("stages[2]")]);
    assert!(results[1].2.ends_with("c3, d4, e5"));
}

#[test]
fn unresolved_references_are_left_to_the_converter() {
    let results = lint(json!([
        { "type": "wait", "refId": "1", "name": "One", "requisiteStageRefIds": ["missing"] }
    ]));
    assert!(results.is_empty());
}
