// ==========================================
// 煤炭质量可行性评估 - 样品实体
// ==========================================
// 单次评估输入，调用方构造，评估期间不可变
// ==========================================

use crate::domain::types::Parameter;
use serde::{Deserialize, Serialize};

/// 煤样检测值
///
/// 核心判定不对取值范围做校验（负数、超过 100% 均按数值参与比较），
/// 范围校验由 `api::SampleValidator` 负责。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 高位发热量 (kcal/kg)
    pub pcs: f64,
    /// 低位发热量 (kcal/kg)
    pub pci: f64,
    /// 灰分 (%)
    pub ash_pct: f64,
    /// 水分 (%)
    pub moisture_pct: f64,
    /// 硫分 (%)
    pub sulfur_pct: f64,
}

impl Sample {
    pub fn new(pcs: f64, pci: f64, ash_pct: f64, moisture_pct: f64, sulfur_pct: f64) -> Self {
        Self {
            pcs,
            pci,
            ash_pct,
            moisture_pct,
            sulfur_pct,
        }
    }

    /// 按参数取值
    pub fn value_of(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Pcs => self.pcs,
            Parameter::Pci => self.pci,
            Parameter::Ash => self.ash_pct,
            Parameter::Moisture => self.moisture_pct,
            Parameter::Sulfur => self.sulfur_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_follows_field_mapping() {
        let sample = Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.3);
        assert_eq!(sample.value_of(Parameter::Pcs), 6000.0);
        assert_eq!(sample.value_of(Parameter::Pci), 5800.0);
        assert_eq!(sample.value_of(Parameter::Ash), 5.0);
        assert_eq!(sample.value_of(Parameter::Moisture), 10.0);
        assert_eq!(sample.value_of(Parameter::Sulfur), 0.3);
    }

    #[test]
    fn test_sample_deserialize() {
        let json = r#"{"pcs":6000,"pci":5800,"ash_pct":5,"moisture_pct":10,"sulfur_pct":0.65}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(sample, Sample::new(6000.0, 5800.0, 5.0, 10.0, 0.65));
    }
}
