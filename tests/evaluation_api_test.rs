// ==========================================
// 评估 API - 集成测试
// ==========================================
// 覆盖: 输入校验、配置注入、报告渲染、错误转换
// ==========================================

mod helpers;

use coal_viability::api::{ApiError, EvaluationApi, FieldBounds, SampleValidator};
use coal_viability::config::{ConfigManager, StaticCriteriaConfig};
use coal_viability::domain::{Parameter, Reason, Sample, Verdict};
use coal_viability::logging;
use helpers::mock_config::MockConfig;
use std::sync::Arc;
use test_helpers::{create_test_db, ideal_sample, insert_test_config, open_test_connection};

fn static_api() -> EvaluationApi {
    logging::init_test();
    EvaluationApi::new(Arc::new(StaticCriteriaConfig::default()))
}

// ==========================================
// 测试 1: 报告内容
// ==========================================

#[tokio::test]
async fn test_report_all_ideal_pt_br() {
    let report = static_api().evaluate(ideal_sample(), "pt-BR").await.unwrap();

    assert_eq!(report.verdict, Verdict::Ok);
    assert_eq!(report.verdict_label, "Verde");
    assert_eq!(report.reasons, vec![Reason::AllIdeal]);
    assert_eq!(
        report.justification(),
        "Todos os parâmetros estão dentro dos limites ideais."
    );
    assert_eq!(report.surcharge_usd_per_t, None);
    assert_eq!(report.surcharge_line(), None);
    assert_eq!(report.sample, ideal_sample());
}

#[tokio::test]
async fn test_report_reject_en() {
    let report = static_api()
        .evaluate(Sample::new(5600.0, 5800.0, 5.0, 10.0, 0.3), "en")
        .await
        .unwrap();

    assert_eq!(report.verdict, Verdict::Reject);
    assert_eq!(report.verdict_label, "Red");
    assert_eq!(report.messages, vec!["PCS out of permitted limit".to_string()]);
}

#[tokio::test]
async fn test_report_surcharge_line_en() {
    let report = static_api()
        .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.68), "en")
        .await
        .unwrap();

    assert_eq!(report.verdict_label, "Yellow");
    assert_eq!(
        report.surcharge_line().as_deref(),
        Some("Additional cost due to sulfur: 5.45 USD/t")
    );
}

#[tokio::test]
async fn test_report_ids_are_unique() {
    let api = static_api();
    let a = api.evaluate(ideal_sample(), "en").await.unwrap();
    let b = api.evaluate(ideal_sample(), "en").await.unwrap();
    assert_ne!(a.evaluation_id, b.evaluation_id);
    assert_eq!(a.verdict, b.verdict);
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let report = static_api()
        .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.65), "pt-BR")
        .await
        .unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["verdict"], "WARNING");
    assert_eq!(value["surcharge_usd_per_t"], 5.24);
    assert_eq!(value["reasons"][0]["type"], "VIOLATION");
    assert_eq!(value["reasons"][0]["kind"], "ABOVE_IDEAL");
    assert_eq!(value["messages"][0], "Enxofre acima do ideal");
}

// ==========================================
// 测试 2: 输入校验
// ==========================================

#[tokio::test]
async fn test_validation_collects_all_violations() {
    let sample = Sample::new(-1.0, 5800.0, 120.0, f64::NAN, 0.3);
    let err = static_api().evaluate(sample, "pt-BR").await.unwrap_err();

    match err {
        ApiError::ValidationError { violations, .. } => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["pcs", "ash_pct", "moisture_pct"]);
            assert_eq!(violations[0].violation_type, "BELOW_MIN");
            assert_eq!(violations[1].violation_type, "ABOVE_MAX");
            assert_eq!(violations[2].violation_type, "NOT_FINITE");
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_custom_validator_bounds() {
    let validator =
        SampleValidator::new().with_bounds(Parameter::Sulfur, FieldBounds::between(0.0, 0.5));
    let api = static_api().with_validator(validator);

    assert!(api.evaluate(ideal_sample(), "en").await.is_ok());
    assert!(matches!(
        api.evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.65), "en").await,
        Err(ApiError::ValidationError { .. })
    ));
}

#[tokio::test]
async fn test_unchecked_skips_validation() {
    let report = static_api()
        .evaluate_unchecked(Sample::new(6000.0, 5800.0, -5.0, 10.0, 0.3), "en")
        .await
        .unwrap();
    assert_eq!(report.verdict, Verdict::Ok);
}

// ==========================================
// 测试 3: 配置注入
// ==========================================

#[tokio::test]
async fn test_mock_config_is_consulted() {
    let config = Arc::new(MockConfig::strict_sulfur());
    let api = EvaluationApi::new(config.clone());

    let report = api
        .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.45), "pt-BR")
        .await
        .unwrap();
    assert_eq!(report.verdict, Verdict::Warning);
    assert_eq!(report.surcharge_usd_per_t, Some(1.25));

    // 内置表中 0.65 有成本，收紧后为红区
    let report = api
        .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.65), "pt-BR")
        .await
        .unwrap();
    assert_eq!(report.verdict, Verdict::Reject);
    assert_eq!(report.surcharge_usd_per_t, None);

    assert_eq!(config.read_count(), 4);
}

#[tokio::test]
async fn test_config_failure_maps_to_database_error() {
    let api = EvaluationApi::new(Arc::new(MockConfig::failing()));
    let result = api.evaluate(ideal_sample(), "pt-BR").await;
    assert!(matches!(result, Err(ApiError::DatabaseError(_))));

    assert!(matches!(
        api.surcharge_for(0.65).await,
        Err(ApiError::DatabaseError(_))
    ));
}

#[tokio::test]
async fn test_validation_runs_before_config_read() {
    let config = Arc::new(MockConfig::failing());
    let api = EvaluationApi::new(config.clone());

    let result = api
        .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 50.0), "pt-BR")
        .await;
    assert!(matches!(result, Err(ApiError::ValidationError { .. })));
    assert_eq!(config.read_count(), 0);
}

#[tokio::test]
async fn test_evaluate_with_database_config() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let conn = open_test_connection(&db_path).unwrap();
    insert_test_config(&conn).unwrap();
    drop(conn);

    let api = EvaluationApi::new(Arc::new(ConfigManager::new(&db_path).unwrap()));

    // 灰分 8.5 超过收紧后的理想上限 8
    let report = api
        .evaluate(Sample::new(6000.0, 5800.0, 8.5, 10.0, 0.57), "en")
        .await
        .unwrap();
    assert_eq!(report.verdict, Verdict::Warning);
    assert_eq!(
        report.messages,
        vec!["Ash above ideal".to_string(), "Sulfur above ideal".to_string()]
    );
    assert_eq!(report.surcharge_usd_per_t, Some(2.20));

    assert_eq!(api.surcharge_for(0.65).await.unwrap(), None);
}
