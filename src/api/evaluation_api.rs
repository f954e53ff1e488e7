// ==========================================
// 煤炭质量可行性评估 - 评估 API
// ==========================================
// 职责: 输入校验 → 读取配置 → 阈值判定 → 生成评估报告
// 红线: API 层不做判定逻辑，只编排
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::SampleValidator;
use crate::config::CriteriaConfigReader;
use crate::domain::evaluation::{EvaluationResult, Reason};
use crate::domain::sample::Sample;
use crate::domain::types::Verdict;
use crate::engine::ThresholdClassifier;
use crate::i18n;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// EvaluationReport - 评估报告 DTO
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub locale: String,
    pub sample: Sample,
    pub verdict: Verdict,
    /// 渲染后的结论（Verde / Amarelo / Vermelho）
    pub verdict_label: String,
    pub reasons: Vec<Reason>,
    /// 渲染后的原因（与 reasons 一一对应）
    pub messages: Vec<String>,
    pub surcharge_usd_per_t: Option<f64>,
}

impl EvaluationReport {
    /// 由判定结果构造报告
    pub fn from_result(sample: Sample, result: &EvaluationResult, locale: &str) -> Self {
        Self {
            evaluation_id: Uuid::new_v4().to_string(),
            evaluated_at: Utc::now(),
            locale: locale.to_string(),
            sample,
            verdict: result.verdict(),
            verdict_label: i18n::t_in(locale, result.verdict().i18n_key()),
            reasons: result.reasons().to_vec(),
            messages: result.messages_in(locale),
            surcharge_usd_per_t: result.surcharge(),
        }
    }

    /// 单行说明（原因以 "; " 连接）
    pub fn justification(&self) -> String {
        self.messages.join("; ")
    }

    /// 附加成本说明（无附加成本时为 None）
    pub fn surcharge_line(&self) -> Option<String> {
        self.surcharge_usd_per_t.map(|cost| {
            i18n::t_with_args_in(
                &self.locale,
                "report.surcharge",
                &[("cost", format!("{:.2}", cost).as_str())],
            )
        })
    }
}

// ==========================================
// EvaluationApi - 评估 API
// ==========================================
pub struct EvaluationApi {
    config: Arc<dyn CriteriaConfigReader>,
    validator: SampleValidator,
}

impl EvaluationApi {
    /// 创建新的 EvaluationApi 实例
    pub fn new(config: Arc<dyn CriteriaConfigReader>) -> Self {
        Self {
            config,
            validator: SampleValidator::default(),
        }
    }

    /// 替换输入校验器
    pub fn with_validator(mut self, validator: SampleValidator) -> Self {
        self.validator = validator;
        self
    }

    /// 按当前配置构建判定引擎
    pub async fn classifier(&self) -> ApiResult<ThresholdClassifier> {
        let criteria = self.config.get_criteria().await?;
        let table = self.config.get_surcharge_table().await?;
        Ok(ThresholdClassifier::new(criteria, table))
    }

    /// 评估单个样品（先做范围校验）
    ///
    /// # 返回
    /// - Ok(EvaluationReport): 评估报告
    /// - Err(ApiError::ValidationError): 输入超出允许范围
    /// - Err(ApiError::InvalidInput): 不支持的语言
    /// - Err(ApiError::ConfigError / DatabaseError): 配置读取失败
    pub async fn evaluate(&self, sample: Sample, locale: &str) -> ApiResult<EvaluationReport> {
        self.validator.validate(&sample)?;
        self.evaluate_unchecked(sample, locale).await
    }

    /// 评估单个样品（不做范围校验，任何数值均参与判定）
    pub async fn evaluate_unchecked(
        &self,
        sample: Sample,
        locale: &str,
    ) -> ApiResult<EvaluationReport> {
        if !i18n::is_supported(locale) {
            return Err(ApiError::InvalidInput(format!("不支持的语言: {}", locale)));
        }

        let classifier = self.classifier().await?;
        let result = classifier.classify(&sample);
        let report = EvaluationReport::from_result(sample, &result, locale);

        tracing::info!(
            evaluation_id = %report.evaluation_id,
            verdict = %report.verdict,
            reasons = report.reasons.len(),
            surcharge = ?report.surcharge_usd_per_t,
            "样品评估完成"
        );

        Ok(report)
    }

    /// 按当前配置的成本表查询硫附加成本
    pub async fn surcharge_for(&self, sulfur_pct: f64) -> ApiResult<Option<f64>> {
        let classifier = self.classifier().await?;
        Ok(classifier.surcharge_lookup().surcharge_for(sulfur_pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticCriteriaConfig;

    fn api() -> EvaluationApi {
        EvaluationApi::new(Arc::new(StaticCriteriaConfig::default()))
    }

    #[tokio::test]
    async fn test_evaluate_warning_report() {
        let report = api()
            .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.65), "pt-BR")
            .await
            .unwrap();

        assert_eq!(report.verdict, Verdict::Warning);
        assert_eq!(report.verdict_label, "Amarelo");
        assert_eq!(report.justification(), "Enxofre acima do ideal");
        assert_eq!(report.surcharge_usd_per_t, Some(5.24));
        assert_eq!(
            report.surcharge_line().unwrap(),
            "Custo adicional devido ao enxofre: 5.24 USD/t"
        );
    }

    #[tokio::test]
    async fn test_evaluate_rejects_out_of_range_input() {
        let result = api()
            .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 11.0), "pt-BR")
            .await;
        assert!(matches!(result, Err(ApiError::ValidationError { .. })));
    }

    #[tokio::test]
    async fn test_evaluate_unchecked_accepts_out_of_range_input() {
        let report = api()
            .evaluate_unchecked(Sample::new(6000.0, 5800.0, 5.0, 10.0, 11.0), "en")
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Reject);
        assert_eq!(report.messages, vec!["Sulfur out of permitted limit".to_string()]);
        assert_eq!(report.surcharge_line(), None);
    }

    #[tokio::test]
    async fn test_unsupported_locale() {
        let result = api()
            .evaluate(Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.3), "fr")
            .await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_surcharge_for_uses_configured_table() {
        assert_eq!(api().surcharge_for(0.61).await.unwrap(), Some(4.97));
        assert_eq!(api().surcharge_for(0.3).await.unwrap(), None);
    }
}
