// ==========================================
// 煤炭质量可行性评估 - 样品输入校验器
// ==========================================
// 职责: 评估前的输入范围校验（核心判定本身不做范围校验）
// 规则: 收集全部违规后一次性返回
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::sample::Sample;
use crate::domain::types::Parameter;
use serde::{Deserialize, Serialize};

// ==========================================
// FieldBounds - 单字段取值范围
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldBounds {
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

// ==========================================
// SampleValidator - 样品输入校验器
// ==========================================

/// 样品输入校验器
///
/// 默认范围:
/// - PCS / PCI ≥ 0
/// - 灰分 / 水分 ∈ [0, 100]
/// - 硫分 ∈ [0, 10]
#[derive(Debug, Clone, PartialEq)]
pub struct SampleValidator {
    pcs: FieldBounds,
    pci: FieldBounds,
    ash: FieldBounds,
    moisture: FieldBounds,
    sulfur: FieldBounds,
}

impl SampleValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换某参数的取值范围
    pub fn with_bounds(mut self, parameter: Parameter, bounds: FieldBounds) -> Self {
        match parameter {
            Parameter::Pcs => self.pcs = bounds,
            Parameter::Pci => self.pci = bounds,
            Parameter::Ash => self.ash = bounds,
            Parameter::Moisture => self.moisture = bounds,
            Parameter::Sulfur => self.sulfur = bounds,
        }
        self
    }

    pub fn bounds(&self, parameter: Parameter) -> FieldBounds {
        match parameter {
            Parameter::Pcs => self.pcs,
            Parameter::Pci => self.pci,
            Parameter::Ash => self.ash,
            Parameter::Moisture => self.moisture,
            Parameter::Sulfur => self.sulfur,
        }
    }

    /// 收集样品的全部违规
    pub fn collect_violations(&self, sample: &Sample) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();

        for parameter in Parameter::ALL {
            let value = sample.value_of(parameter);
            let bounds = self.bounds(parameter);
            let field = field_name(parameter);

            if !value.is_finite() {
                violations.push(ValidationViolation {
                    violation_type: "NOT_FINITE".to_string(),
                    field: field.to_string(),
                    value,
                    reason: format!("{} 必须为有限数值", field),
                });
                continue;
            }

            if let Some(min) = bounds.min {
                if value < min {
                    violations.push(ValidationViolation {
                        violation_type: "BELOW_MIN".to_string(),
                        field: field.to_string(),
                        value,
                        reason: format!("{}={} 低于下限 {} {}", field, value, min, parameter.unit()),
                    });
                    continue;
                }
            }

            if let Some(max) = bounds.max {
                if value > max {
                    violations.push(ValidationViolation {
                        violation_type: "ABOVE_MAX".to_string(),
                        field: field.to_string(),
                        value,
                        reason: format!("{}={} 高于上限 {} {}", field, value, max, parameter.unit()),
                    });
                }
            }
        }

        violations
    }

    /// 校验样品
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ApiError::ValidationError): 至少一项违规
    pub fn validate(&self, sample: &Sample) -> ApiResult<()> {
        let violations = self.collect_violations(sample);
        if violations.is_empty() {
            return Ok(());
        }

        tracing::warn!(count = violations.len(), "样品输入校验失败");
        Err(ApiError::ValidationError {
            reason: format!("{} 项违规", violations.len()),
            violations,
        })
    }
}

impl Default for SampleValidator {
    fn default() -> Self {
        Self {
            pcs: FieldBounds::at_least(0.0),
            pci: FieldBounds::at_least(0.0),
            ash: FieldBounds::between(0.0, 100.0),
            moisture: FieldBounds::between(0.0, 100.0),
            sulfur: FieldBounds::between(0.0, 10.0),
        }
    }
}

/// 参数 → Sample 字段名
fn field_name(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::Pcs => "pcs",
        Parameter::Pci => "pci",
        Parameter::Ash => "ash_pct",
        Parameter::Moisture => "moisture_pct",
        Parameter::Sulfur => "sulfur_pct",
    }
}
