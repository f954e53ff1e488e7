// ==========================================
// 煤炭质量可行性评估 - 核心库
// ==========================================
// 职责: 单样品阈值判定（绿/黄/红）+ 硫附加成本查询
// 系统定位: 决策支持（图表、PDF、表单由展示层负责）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 判定规则
pub mod engine;

// 配置层 - 判定标准与成本表
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Band, CriteriaSet, Criterion, Direction, EvaluationResult, Parameter, Reason, ReasonKind,
    Sample, SurchargeTable, Verdict,
};

// 引擎
pub use engine::{ClassifierCore, SurchargeLookup, ThresholdClassifier};

// 配置
pub use config::{ConfigError, ConfigManager, CriteriaConfigReader, StaticCriteriaConfig};

// API
pub use api::{ApiError, ApiResult, EvaluationApi, EvaluationReport, SampleValidator};

// ==========================================
// 便捷函数
// ==========================================

/// 使用内置判定标准与成本表评估单个样品
///
/// # 示例
/// ```
/// use coal_viability::{classify, Sample, Verdict};
/// let result = classify(&Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.65));
/// assert_eq!(result.verdict(), Verdict::Warning);
/// assert_eq!(result.surcharge(), Some(5.24));
/// ```
pub fn classify(sample: &Sample) -> EvaluationResult {
    ThresholdClassifier::default().classify(sample)
}

/// 使用内置成本表查询硫附加成本
pub fn surcharge_for(sulfur_pct: f64) -> Option<f64> {
    SurchargeLookup::default().surcharge_for(sulfur_pct)
}

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "煤炭质量可行性评估";
