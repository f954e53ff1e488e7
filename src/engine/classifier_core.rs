// ==========================================
// 煤炭质量可行性评估 - Classifier Core 纯函数库
// ==========================================
// 职责: 提供单参数区间判定、结论升级的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::criteria::Criterion;
use crate::domain::evaluation::ReasonKind;
use crate::domain::types::{Band, Verdict};

// ==========================================
// ClassifierCore - 纯函数工具类
// ==========================================
pub struct ClassifierCore;

impl ClassifierCore {
    /// 越高越好参数的区间判定（PCS / PCI）
    ///
    /// # 规则
    /// 1. value < red_max → 红
    /// 2. value < green_min → 黄
    /// 3. 否则 → 绿
    ///
    /// 边界值本身不触发: value == red_max 落入黄区, value == green_min 落入绿区
    pub fn assess_higher_is_better(value: f64, green_min: f64, red_max: f64) -> Band {
        if value < red_max {
            Band::Red
        } else if value < green_min {
            Band::Yellow
        } else {
            Band::Green
        }
    }

    /// 越低越好参数的区间判定（灰分 / 水分 / 硫分）
    ///
    /// # 规则
    /// 1. value > red_min → 红
    /// 2. value > green_max → 黄
    /// 3. 否则 → 绿
    pub fn assess_lower_is_better(value: f64, green_max: f64, red_min: f64) -> Band {
        if value > red_min {
            Band::Red
        } else if value > green_max {
            Band::Yellow
        } else {
            Band::Green
        }
    }

    /// 按判定标准评估单参数
    ///
    /// # 返回
    /// - (Band, Option<ReasonKind>): 区间 + 违规类型（绿区无违规）
    ///
    /// 注: NaN 与任何阈值比较均为 false，因此落入绿区
    pub fn assess(value: f64, criterion: &Criterion) -> (Band, Option<ReasonKind>) {
        match criterion {
            Criterion::HigherIsBetter {
                green_min, red_max, ..
            } => {
                let band = Self::assess_higher_is_better(value, *green_min, *red_max);
                let kind = match band {
                    Band::Red => Some(ReasonKind::OutOfLimit),
                    Band::Yellow => Some(ReasonKind::BelowIdeal),
                    Band::Green => None,
                };
                (band, kind)
            }
            Criterion::LowerIsBetter {
                green_max, red_min, ..
            } => {
                let band = Self::assess_lower_is_better(value, *green_max, *red_min);
                let kind = match band {
                    Band::Red => Some(ReasonKind::OutOfLimit),
                    Band::Yellow => Some(ReasonKind::AboveIdeal),
                    Band::Green => None,
                };
                (band, kind)
            }
        }
    }

    /// 结论升级
    ///
    /// # 规则
    /// - 红区 → Reject
    /// - 黄区 → 仅当当前仍为 Ok 时升为 Warning（不把 Reject 降级）
    /// - 绿区 → 保持不变
    pub fn escalate(current: Verdict, band: Band) -> Verdict {
        current.escalate(band.verdict())
    }
}
