//! Property tests for the evaluator's bounds.

use apo_core::StageOutput;
use apo_eval::Evaluator;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

/// Arbitrary JSON values a model might put where a list or string is expected.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z ]{0,12}".prop_map(Value::String),
        prop::collection::vec("[a-z]{1,6}".prop_map(Value::String), 0..12).prop_map(Value::Array),
        prop::collection::vec(
            prop::collection::vec("TASK-[0-9]".prop_map(Value::String), 0..3)
                .prop_map(|deps| json!({"id": "TASK-1", "depends_on": deps})),
            0..10
        )
        .prop_map(Value::Array),
    ]
}

fn arb_section(keys: &'static [&'static str]) -> impl Strategy<Value = Value> {
    prop::collection::vec(prop::option::of(arb_leaf()), keys.len()).prop_map(move |values| {
        let mut map = Map::new();
        for (key, value) in keys.iter().zip(values) {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        }
        Value::Object(map)
    })
}

fn arb_analysis() -> impl Strategy<Value = StageOutput> {
    (
        arb_section(&["pain_point", "why_now"]),
        arb_section(&["primary_persona"]),
        arb_section(&["demand_indicators"]),
    )
        .prop_map(|(problem, user, market)| {
            let mut map = Map::new();
            map.insert("problem_definition".into(), problem);
            map.insert("target_user".into(), user);
            map.insert("market_opportunity".into(), market);
            map
        })
}

fn arb_prioritization() -> impl Strategy<Value = StageOutput> {
    (
        arb_section(&["must_have", "should_have", "could_have", "wont_have_now"]),
        arb_section(&["included_features", "excluded_to_prevent_creep", "release_criteria"]),
    )
        .prop_map(|(moscow, scope)| {
            let mut map = Map::new();
            map.insert("moscow".into(), moscow);
            map.insert("mvp_scope".into(), scope);
            map
        })
}

fn arb_roadmap() -> impl Strategy<Value = StageOutput> {
    arb_section(&["execution_plan_7_days", "cursor_ready_tasks", "kpis", "risks"]).prop_map(
        |section| match section {
            Value::Object(map) => map,
            _ => Map::new(),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every subscore stays in 1..=10 and the total in 1000..=10000, whatever
    /// shape the stage outputs take.
    #[test]
    fn prop_scores_stay_in_bounds(
        analysis in arb_analysis(),
        prioritization in arb_prioritization(),
        roadmap in arb_roadmap(),
    ) {
        let result = Evaluator::new().evaluate(&analysis, &prioritization, &roadmap);
        let s = result.subscores;

        for score in [s.clarity, s.priority_strength, s.mvp_strictness, s.execution_feasibility] {
            prop_assert!((1..=10).contains(&score), "subscore out of range: {score}");
        }
        prop_assert!((1000..=10000).contains(&result.total_score));
        prop_assert_eq!(
            result.total_score,
            200 * s.clarity + 300 * s.priority_strength + 300 * s.mvp_strictness + 200 * s.execution_feasibility
        );
    }

    /// Scoring the same input twice gives the same result.
    #[test]
    fn prop_evaluation_is_deterministic(
        analysis in arb_analysis(),
        prioritization in arb_prioritization(),
        roadmap in arb_roadmap(),
    ) {
        let evaluator = Evaluator::new();
        prop_assert_eq!(
            evaluator.evaluate(&analysis, &prioritization, &roadmap),
            evaluator.evaluate(&analysis, &prioritization, &roadmap)
        );
    }
}

#[test]
fn four_in_range_features_with_exclusions_reach_ten() {
    let prioritization: StageOutput = serde_json::from_value(json!({
        "mvp_scope": {
            "included_features": ["portfolio sync", "alerts", "dashboard", "export"],
            "excluded_to_prevent_creep": ["social feed", "trading"],
            "release_criteria": ["10 beta users onboarded"]
        }
    }))
    .unwrap();
    let empty = StageOutput::new();

    let result = Evaluator::new().evaluate(&empty, &prioritization, &empty);
    assert_eq!(result.subscores.mvp_strictness, 10);
}
