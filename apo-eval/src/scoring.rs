//! Subscore computation
//!
//! Every lookup is lenient: a missing key or a non-object container reads as
//! empty, and list fields take the length of whatever value sits there.
//! Scoring never fails.

use crate::report::{EvaluationResult, Subscores};
use apo_core::StageOutput;
use serde_json::Value;

const MIN_SUBSCORE: i64 = 1;
const MAX_SUBSCORE: i64 = 10;

/// Scores a plan with a fixed weighted formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Compute all four subscores and the weighted total.
    pub fn evaluate(
        &self,
        analysis: &StageOutput,
        prioritization: &StageOutput,
        roadmap: &StageOutput,
    ) -> EvaluationResult {
        EvaluationResult::from_subscores(Subscores {
            clarity: score_clarity(analysis),
            priority_strength: score_priority_strength(prioritization),
            mvp_strictness: score_mvp_strictness(prioritization),
            execution_feasibility: score_execution_feasibility(roadmap),
        })
    }
}

pub fn score_clarity(analysis: &StageOutput) -> u32 {
    let has_problem = is_truthy(field(analysis, &["problem_definition", "pain_point"]));
    let has_persona = is_truthy(field(analysis, &["target_user", "primary_persona"]));
    let indicators = count(field(analysis, &["market_opportunity", "demand_indicators"]));

    clamp(4 + bonus(has_problem, 2) + bonus(has_persona, 2) + indicators.min(2))
}

pub fn score_priority_strength(prioritization: &StageOutput) -> u32 {
    let must_have = count(field(prioritization, &["moscow", "must_have"]));
    let should_have = count(field(prioritization, &["moscow", "should_have"]));
    let wont_have = count(field(prioritization, &["moscow", "wont_have_now"]));

    clamp(3 + must_have.min(4) + should_have.min(2) + wont_have.min(1))
}

pub fn score_mvp_strictness(prioritization: &StageOutput) -> u32 {
    let included = count(field(prioritization, &["mvp_scope", "included_features"]));
    let excluded = count(field(prioritization, &["mvp_scope", "excluded_to_prevent_creep"]));
    let release_criteria = count(field(prioritization, &["mvp_scope", "release_criteria"]));

    let in_range = (3..=6).contains(&included);
    clamp(4 + bonus(in_range, 3) + excluded.min(2) + release_criteria.min(1))
}

pub fn score_execution_feasibility(roadmap: &StageOutput) -> u32 {
    let plan_days = count(field(roadmap, &["execution_plan_7_days"]));
    let tasks = count(field(roadmap, &["cursor_ready_tasks"]));
    let kpis = count(field(roadmap, &["kpis"]));
    let risks = count(field(roadmap, &["risks"]));

    let has_dependencies = field(roadmap, &["cursor_ready_tasks"])
        .and_then(Value::as_array)
        .is_some_and(|items| {
            items.iter().any(|task| is_truthy(task.as_object().and_then(|t| t.get("depends_on"))))
        });

    clamp(
        3 + bonus(plan_days == 7, 3)
            + tasks.min(2)
            + kpis.min(1)
            + risks.min(1)
            + bonus(has_dependencies, 1),
    )
}

/// Walk nested objects; any non-object along the way yields `None`.
fn field<'a>(root: &'a StageOutput, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Item count of a collection-like value: array items, object keys, or string
/// characters. Numbers, booleans, and null count as empty.
fn count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Array(items)) => items.len() as i64,
        Some(Value::Object(map)) => map.len() as i64,
        Some(Value::String(s)) => s.chars().count() as i64,
        _ => 0,
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

fn bonus(condition: bool, points: i64) -> i64 {
    if condition { points } else { 0 }
}

fn clamp(raw: i64) -> u32 {
    raw.clamp(MIN_SUBSCORE, MAX_SUBSCORE) as u32
}
