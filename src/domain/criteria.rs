// ==========================================
// 煤炭质量可行性评估 - 判定标准
// ==========================================
// 每个参数一组区间边界（绿/黄/红）
// 红线: 只有绿区边界与红区边界参与判定；黄区值仅作标注
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::{Direction, Parameter};
use serde::{Deserialize, Serialize};

// ==========================================
// Criterion - 单参数判定标准
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Criterion {
    /// 越高越好: value < red_max → 红; value < green_min → 黄
    HigherIsBetter {
        green_min: f64,
        yellow_min: f64,
        red_max: f64,
    },
    /// 越低越好: value > red_min → 红; value > green_max → 黄
    LowerIsBetter {
        green_max: f64,
        yellow_max: f64,
        red_min: f64,
    },
}

impl Criterion {
    pub fn direction(&self) -> Direction {
        match self {
            Criterion::HigherIsBetter { .. } => Direction::HigherIsBetter,
            Criterion::LowerIsBetter { .. } => Direction::LowerIsBetter,
        }
    }

    /// 绿区边界（green_min / green_max）
    pub fn green_bound(&self) -> f64 {
        match self {
            Criterion::HigherIsBetter { green_min, .. } => *green_min,
            Criterion::LowerIsBetter { green_max, .. } => *green_max,
        }
    }

    /// 红区边界（red_max / red_min）
    pub fn red_bound(&self) -> f64 {
        match self {
            Criterion::HigherIsBetter { red_max, .. } => *red_max,
            Criterion::LowerIsBetter { red_min, .. } => *red_min,
        }
    }

    /// 校验阈值有限且绿/红边界顺序正确
    ///
    /// # 规则
    /// - 越高越好: red_max ≤ green_min
    /// - 越低越好: green_max ≤ red_min
    pub fn validate(&self, parameter: Parameter) -> ConfigResult<()> {
        if self.direction() != parameter.direction() {
            return Err(ConfigError::DirectionMismatch {
                parameter,
                expected: parameter.direction(),
                actual: self.direction(),
            });
        }

        let fields: [(&'static str, f64); 3] = match self {
            Criterion::HigherIsBetter {
                green_min,
                yellow_min,
                red_max,
            } => [
                ("green_min", *green_min),
                ("yellow_min", *yellow_min),
                ("red_max", *red_max),
            ],
            Criterion::LowerIsBetter {
                green_max,
                yellow_max,
                red_min,
            } => [
                ("green_max", *green_max),
                ("yellow_max", *yellow_max),
                ("red_min", *red_min),
            ],
        };
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFiniteThreshold { parameter, field });
        }

        match self {
            Criterion::HigherIsBetter {
                green_min, red_max, ..
            } if red_max > green_min => Err(ConfigError::ThresholdOrder {
                parameter,
                detail: format!("red_max={} > green_min={}", red_max, green_min),
            }),
            Criterion::LowerIsBetter {
                green_max, red_min, ..
            } if green_max > red_min => Err(ConfigError::ThresholdOrder {
                parameter,
                detail: format!("green_max={} > red_min={}", green_max, red_min),
            }),
            _ => Ok(()),
        }
    }
}

// ==========================================
// CriteriaSet - 五参数判定标准集合
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    pub pcs: Criterion,
    pub pci: Criterion,
    pub ash: Criterion,
    pub moisture: Criterion,
    pub sulfur: Criterion,
}

impl CriteriaSet {
    /// 按参数取判定标准
    pub fn get(&self, parameter: Parameter) -> &Criterion {
        match parameter {
            Parameter::Pcs => &self.pcs,
            Parameter::Pci => &self.pci,
            Parameter::Ash => &self.ash,
            Parameter::Moisture => &self.moisture,
            Parameter::Sulfur => &self.sulfur,
        }
    }

    /// 按参数替换判定标准
    pub fn set(&mut self, parameter: Parameter, criterion: Criterion) {
        match parameter {
            Parameter::Pcs => self.pcs = criterion,
            Parameter::Pci => self.pci = criterion,
            Parameter::Ash => self.ash = criterion,
            Parameter::Moisture => self.moisture = criterion,
            Parameter::Sulfur => self.sulfur = criterion,
        }
    }

    /// 逐参数校验（按固定评估顺序，遇到第一个错误即返回）
    pub fn validate(&self) -> ConfigResult<()> {
        for parameter in Parameter::ALL {
            self.get(parameter).validate(parameter)?;
        }
        Ok(())
    }
}

impl Default for CriteriaSet {
    /// 内置判定标准
    fn default() -> Self {
        Self {
            pcs: Criterion::HigherIsBetter {
                green_min: 5800.0,
                yellow_min: 5700.0,
                red_max: 5700.0,
            },
            pci: Criterion::HigherIsBetter {
                green_min: 5700.0,
                yellow_min: 5600.0,
                red_max: 5600.0,
            },
            ash: Criterion::LowerIsBetter {
                green_max: 9.0,
                yellow_max: 10.0,
                red_min: 10.0,
            },
            moisture: Criterion::LowerIsBetter {
                green_max: 16.0,
                yellow_max: 17.0,
                red_min: 17.0,
            },
            sulfur: Criterion::LowerIsBetter {
                green_max: 0.55,
                yellow_max: 0.69,
                red_min: 0.7,
            },
        }
    }
}
