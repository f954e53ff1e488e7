// ==========================================
// 煤炭质量可行性评估 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::{Direction, Parameter};
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 判定标准错误 =====
    #[error("判定标准方向错误: parameter={parameter}, expected={expected}, actual={actual}")]
    DirectionMismatch {
        parameter: Parameter,
        expected: Direction,
        actual: Direction,
    },

    #[error("判定标准阈值非有限数: parameter={parameter}, field={field}")]
    NonFiniteThreshold {
        parameter: Parameter,
        field: &'static str,
    },

    #[error("判定标准阈值顺序错误: parameter={parameter}, {detail}")]
    ThresholdOrder { parameter: Parameter, detail: String },

    // ===== 硫附加成本表错误 =====
    #[error("附加成本表键无效: {0}")]
    InvalidSurchargeKey(String),

    #[error("附加成本必须为正数: sulfur_pct={key}, cost={cost}")]
    NonPositiveSurcharge { key: String, cost: f64 },

    #[error("附加成本表键重复（两位小数舍入后）: {0}")]
    DuplicateSurchargeKey(String),

    // ===== 存储错误 =====
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("锁获取失败: {0}")]
    LockError(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
