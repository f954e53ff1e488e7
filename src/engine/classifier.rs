// ==========================================
// 煤炭质量可行性评估 - 阈值判定引擎
// ==========================================
// 职责: 五参数逐一判定，合成结论、原因、硫附加成本
// 输入: Sample
// 输出: EvaluationResult
// 红线: 纯函数（无 I/O），结论只升不降，所有判定必须输出原因
// ==========================================

use crate::domain::criteria::CriteriaSet;
use crate::domain::evaluation::{EvaluationResult, Reason};
use crate::domain::sample::Sample;
use crate::domain::surcharge::SurchargeTable;
use crate::domain::types::{Band, Parameter, Verdict};
use crate::engine::classifier_core::ClassifierCore;
use crate::engine::surcharge::SurchargeLookup;

// ==========================================
// ThresholdClassifier - 阈值判定引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct ThresholdClassifier {
    criteria: CriteriaSet,
    surcharge: SurchargeLookup,
}

impl ThresholdClassifier {
    /// 构造函数
    ///
    /// 判定标准与成本表在构造时注入，之后不可变。
    pub fn new(criteria: CriteriaSet, table: SurchargeTable) -> Self {
        Self {
            criteria,
            surcharge: SurchargeLookup::new(table),
        }
    }

    /// 使用已有的附加成本查询器构造
    pub fn with_lookup(criteria: CriteriaSet, surcharge: SurchargeLookup) -> Self {
        Self {
            criteria,
            surcharge,
        }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn surcharge_lookup(&self) -> &SurchargeLookup {
        &self.surcharge
    }

    /// 评估单个样品
    ///
    /// # 规则
    /// 1. 按 PCS → PCI → 灰分 → 水分 → 硫分 顺序逐一判定
    /// 2. 红区 → Reject + "超出允许限值"
    /// 3. 黄区 → 仍为 Ok 时升为 Warning + "低于/高于理想值"
    /// 4. 硫分处于黄区时查询附加成本（红区不查询）
    /// 5. Reject 吸收: 后续参数只追加原因，不改变结论
    /// 6. 无任何违规 → Ok + "全部参数理想"
    pub fn classify(&self, sample: &Sample) -> EvaluationResult {
        let mut verdict = Verdict::Ok;
        let mut reasons = Vec::new();
        let mut surcharge = None;

        for parameter in Parameter::ALL {
            let value = sample.value_of(parameter);
            let (band, kind) = ClassifierCore::assess(value, self.criteria.get(parameter));

            tracing::debug!(
                parameter = %parameter,
                value,
                band = %band,
                "参数判定"
            );

            verdict = ClassifierCore::escalate(verdict, band);
            if let Some(kind) = kind {
                reasons.push(Reason::violation(parameter, kind));
            }

            if parameter == Parameter::Sulfur && band == Band::Yellow {
                surcharge = self.surcharge.surcharge_for(value);
            }
        }

        EvaluationResult::new(verdict, reasons, surcharge)
    }
}

impl Default for ThresholdClassifier {
    /// 内置判定标准 + 内置成本表
    fn default() -> Self {
        Self::new(CriteriaSet::default(), SurchargeTable::default())
    }
}
