use serde_json::{json, Value};
use spin_dcd_converter::core::convert::{convert, stage_id};
use spin_dcd_converter::core::types::ErrorCategory;

fn fixture() -> Value {
    serde_json::from_str(include_str!("../fixtures/pipeline_config.json")).expect("fixture json")
}

fn pipeline(stages: Value) -> Value {
    json!({
        "lastModifiedBy": "ops@example.com",
        "parallel": true,
        "limitConcurrent": true,
        "stages": stages
    })
}

#[test]
fn stage_ids_follow_source_order() {
    let source = fixture();
    let template = convert(&source).expect("convert");
    let expected: Vec<String> = source["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| stage_id(s["type"].as_str().unwrap(), s["refId"].as_str().unwrap()))
        .collect();
    let actual: Vec<&str> = template.stage_ids().collect();
    assert_eq!(actual, expected);
    assert_eq!(
        actual,
        vec!["bake1", "deploy2", "manualJudgment4", "wait3", "deploy5"]
    );
}

#[test]
fn depends_on_resolves_in_reference_order() {
    let template = convert(&fixture()).expect("convert");
    assert!(template.stage("bake1").unwrap().depends_on.is_empty());
    assert_eq!(template.stage("deploy2").unwrap().depends_on, vec!["bake1"]);
    assert_eq!(
        template.stage("manualJudgment4").unwrap().depends_on,
        vec!["deploy2", "wait3"]
    );
    assert_eq!(
        template.stage("deploy5").unwrap().depends_on,
        vec!["manualJudgment4"]
    );
}

#[test]
fn forward_references_resolve() {
    let source = pipeline(json!([
        { "type": "wait", "refId": "a", "name": "First", "requisiteStageRefIds": ["b"] },
        { "type": "bake", "refId": "b", "name": "Second" }
    ]));
    let template = convert(&source).expect("convert");
    assert_eq!(template.stages[0].depends_on, vec!["bakeb"]);
}

#[test]
fn reference_order_is_kept_not_sorted() {
    let source = pipeline(json!([
        { "type": "wait", "refId": "1", "name": "One" },
        { "type": "wait", "refId": "2", "name": "Two" },
        { "type": "join", "refId": "3", "name": "Join", "requisiteStageRefIds": ["2", "1"] }
    ]));
    let template = convert(&source).expect("convert");
    assert_eq!(template.stages[2].depends_on, vec!["wait2", "wait1"]);
}

#[test]
fn stage_without_requisites_has_no_dependencies() {
    let source = pipeline(json!([
        { "type": "wait", "refId": "1", "name": "One" },
        { "type": "wait", "refId": "2", "name": "Two", "requisiteStageRefIds": null }
    ]));
    let template = convert(&source).expect("convert");
    assert!(template.stages.iter().all(|s| s.depends_on.is_empty()));
}

#[test]
fn unresolved_reference_fails() {
    let source = pipeline(json!([
        { "type": "wait", "refId": "1", "name": "One", "requisiteStageRefIds": ["missing"] }
    ]));
    let err = convert(&source).expect_err("unresolved reference");
    assert_eq!(err.category, ErrorCategory::UnresolvedStageReference);
    assert_eq!(err.code, "DCD-STAGE-001");
    assert_eq!(err.context.get("refId"), Some(&"missing".to_string()));
    assert_eq!(err.context.get("stage"), Some(&"wait1".to_string()));
}

#[test]
fn duplicate_ref_ids_resolve_to_first_stage() {
    let source = pipeline(json!([
        { "type": "bake", "refId": "1", "name": "Bake" },
        { "type": "wait", "refId": "1", "name": "Shadow" },
        { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["1"] }
    ]));
    let template = convert(&source).expect("convert");
    assert_eq!(template.stages[2].depends_on, vec!["bake1"]);
}

#[test]
fn cycles_are_recorded_without_failing() {
    let source = pipeline(json!([
        { "type": "wait", "refId": "1", "name": "One", "requisiteStageRefIds": ["2"] },
        { "type": "wait", "refId": "2", "name": "Two", "requisiteStageRefIds": ["1"] }
    ]));
    let template = convert(&source).expect("convert");
    assert_eq!(template.stages[0].depends_on, vec!["wait2"]);
    assert_eq!(template.stages[1].depends_on, vec!["wait1"]);
}
