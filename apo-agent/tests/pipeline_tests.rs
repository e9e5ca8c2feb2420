use apo_agent::Pipeline;
use apo_core::ApoError;
use apo_model::MockCompletion;
use serde_json::json;
use std::sync::Arc;

const ANALYSIS: &str = r#"{
    "problem_definition": {"pain_point": "holdings spread across exchanges", "why_now": "ETF inflows", "current_alternatives": ["spreadsheets"]},
    "target_user": {"primary_persona": "retail investor with 3+ wallets", "jobs_to_be_done": ["see net worth"], "adoption_barriers": ["trust"]},
    "market_opportunity": {"market_size_signal": "large", "demand_indicators": ["forum threads", "app reviews"], "wedge_strategy": "read-only sync"}
}"#;

const PRIORITIZATION: &str = r#"{
    "moscow": {"must_have": ["wallet sync", "net worth view"], "should_have": ["alerts"], "could_have": ["tax export"], "wont_have_now": ["trading"]},
    "mvp_scope": {"strict_goal": "one view of all holdings", "included_features": ["wallet sync", "net worth view", "alerts"], "excluded_to_prevent_creep": ["trading", "social"], "release_criteria": ["50 beta users"]},
    "rationale": {"priority_logic": ["prove value fast"], "tradeoffs": ["no mobile app"]}
}"#;

const ROADMAP: &str = r#"{
    "technical_architecture": {"stack": ["rust", "postgres"], "core_components": ["sync worker"], "data_model_notes": [], "security_basics": ["read-only keys"]},
    "cursor_ready_tasks": [
        {"id": "TASK-1", "title": "schema", "description": "", "depends_on": [], "acceptance_criteria": []},
        {"id": "TASK-2", "title": "sync", "description": "", "depends_on": ["TASK-1"], "acceptance_criteria": []}
    ],
    "execution_plan_7_days": [{"day": 1}, {"day": 2}, {"day": 3}, {"day": 4}, {"day": 5}, {"day": 6}, {"day": 7}],
    "kpis": [{"name": "weekly active", "target": "30%", "measurement": "events"}],
    "risks": [{"risk": "exchange API limits", "impact": "high", "mitigation": "caching"}]
}"#;

#[tokio::test]
async fn full_pipeline_produces_report_in_stage_order() {
    let mock = Arc::new(
        MockCompletion::new("mock")
            .with_response(ANALYSIS)
            .with_response(PRIORITIZATION)
            .with_response(ROADMAP),
    );
    let pipeline = Pipeline::new(mock.clone());
    assert_eq!(pipeline.model(), "mock");

    let report = pipeline.run("AI crypto portfolio tracker").await.unwrap();

    // clarity 4+2+2+2, priority 3+2+1+1, mvp 4+3+2+1, feasibility 3+3+2+1+1+1 clamped
    let subscores = report.evaluation.subscores;
    assert_eq!(subscores.clarity, 10);
    assert_eq!(subscores.priority_strength, 7);
    assert_eq!(subscores.mvp_strictness, 10);
    assert_eq!(subscores.execution_feasibility, 10);
    assert_eq!(report.evaluation.total_score, 2000 + 2100 + 3000 + 2000);

    let value = serde_json::to_value(&report).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for key in ["startup_idea", "analysis", "prioritization", "roadmap", "evaluation"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(value["startup_idea"], json!("AI crypto portfolio tracker"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[1].user_prompt.contains("holdings spread across exchanges"));
    assert!(requests[2].user_prompt.contains("one view of all holdings"));
    assert!(requests[2].user_prompt.contains("exactly 7 days"));
}

#[tokio::test]
async fn failure_in_a_stage_aborts_the_run() {
    let mock = Arc::new(
        MockCompletion::new("mock")
            .with_response(ANALYSIS)
            .with_error(ApoError::ProviderHttp {
                provider: "OpenAI".to_string(),
                status_code: 500,
                body: "upstream failure".to_string(),
            })
            .with_response(ROADMAP),
    );
    let pipeline = Pipeline::new(mock.clone());

    let err = pipeline.run("idea").await.unwrap_err();
    assert!(matches!(err, ApoError::ProviderHttp { status_code: 500, .. }));
    assert_eq!(mock.requests().len(), 2, "roadmap stage must not run");
}

#[tokio::test]
async fn invalid_model_json_surfaces_unchanged() {
    let mock = Arc::new(MockCompletion::new("mock").with_response("not json"));
    let err = Pipeline::new(mock).run("idea").await.unwrap_err();
    assert!(matches!(err, ApoError::InvalidResponseFormat(_)));
}

#[tokio::test]
async fn empty_stage_outputs_score_baseline() {
    let mock = Arc::new(
        MockCompletion::new("mock").with_response("{}").with_response("{}").with_response("{}"),
    );
    let report = Pipeline::new(mock).run("idea").await.unwrap();
    assert_eq!(report.evaluation.total_score, 3500);
}
