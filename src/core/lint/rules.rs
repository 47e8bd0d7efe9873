use super::{LintResult, LintSeverity, StageLintRule};
use crate::core::convert::stage_id;
use crate::core::pipeline_config::SourceStage;
use indexmap::IndexMap;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

pub fn built_in_rules() -> Vec<Box<dyn StageLintRule>> {
    vec![
        Box::new(DuplicateRefIdsRule),
        Box::new(SelfDependencyRule),
        Box::new(DependencyCycleRule),
    ]
}

struct DuplicateRefIdsRule;

impl StageLintRule for DuplicateRefIdsRule {
    fn validate(&self, stages: &[SourceStage<'_>]) -> Vec<LintResult> {
        let mut positions: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for stage in stages {
            positions.entry(stage.ref_id).or_default().push(stage.index);
        }

        positions
            .into_iter()
            .filter(|(_, indexes)| indexes.len() > 1)
            .map(|(ref_id, indexes)| {
                LintResult::new(
                    "DCD-LINT-001",
                    LintSeverity::Warning,
                    format!(
                        "refId '{}' is used by {} stages; dependencies resolve to stages[{}]",
                        ref_id,
                        indexes.len(),
                        indexes[0]
                    ),
                    Some(format!("stages[{}]", indexes[1])),
                    Some("give every stage a unique refId".to_string()),
                )
            })
            .collect()
    }
}

struct SelfDependencyRule;

impl StageLintRule for SelfDependencyRule {
    fn validate(&self, stages: &[SourceStage<'_>]) -> Vec<LintResult> {
        stages
            .iter()
            .filter(|stage| stage.requisite_ref_ids.contains(&stage.ref_id))
            .map(|stage| {
                LintResult::new(
                    "DCD-LINT-002",
                    LintSeverity::Warning,
                    format!(
                        "stage '{}' depends on itself",
                        stage_id(stage.stage_type, stage.ref_id)
                    ),
                    Some(format!("stages[{}]", stage.index)),
                    Some("remove the stage's own refId from requisiteStageRefIds".to_string()),
                )
            })
            .collect()
    }
}

struct DependencyCycleRule;

impl StageLintRule for DependencyCycleRule {
    fn validate(&self, stages: &[SourceStage<'_>]) -> Vec<LintResult> {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> = stages.iter().map(|s| graph.add_node(s.index)).collect();

        let mut by_ref_id: IndexMap<&str, NodeIndex> = IndexMap::new();
        for (stage, node) in stages.iter().zip(&nodes) {
            by_ref_id.entry(stage.ref_id).or_insert(*node);
        }

        for (stage, node) in stages.iter().zip(&nodes) {
            for ref_id in &stage.requisite_ref_ids {
                if let Some(upstream) = by_ref_id.get(ref_id) {
                    if upstream != node {
                        graph.add_edge(*upstream, *node, ());
                    }
                }
            }
        }

        let mut out = Vec::new();
        for component in tarjan_scc(&graph) {
            if component.len() < 2 {
                continue;
            }
            let mut members: Vec<usize> = component.iter().map(|node| graph[*node]).collect();
            members.sort_unstable();
            let ids: Vec<String> = members
                .iter()
                .map(|index| stage_id(stages[*index].stage_type, stages[*index].ref_id))
                .collect();
            out.push(LintResult::new(
                "DCD-LINT-003",
                LintSeverity::Warning,
                format!("dependency cycle between stages: {}", ids.join(", ")),
                Some(format!("stages[{}]", members[0])),
                Some("break the cycle before using the template".to_string()),
            ));
        }
        out.sort_by(|a, b| a.location.cmp(&b.location));
        out
    }
}
