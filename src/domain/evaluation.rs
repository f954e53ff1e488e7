// ==========================================
// 煤炭质量可行性评估 - 评估结果
// ==========================================
// 红线: 所有判定必须输出原因（reasons 永不为空）
// 原因以类型化形式保存，渲染时再按语言翻译，判定本身不依赖语言环境
// ==========================================

use crate::domain::types::{Parameter, Verdict};
use crate::i18n;
use serde::{Deserialize, Serialize};

// ==========================================
// ReasonKind - 违规类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonKind {
    OutOfLimit, // 超出允许限值（红）
    BelowIdeal, // 低于理想值（黄，越高越好）
    AboveIdeal, // 高于理想值（黄，越低越好）
}

impl ReasonKind {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ReasonKind::OutOfLimit => "reason.out_of_limit",
            ReasonKind::BelowIdeal => "reason.below_ideal",
            ReasonKind::AboveIdeal => "reason.above_ideal",
        }
    }
}

// ==========================================
// Reason - 判定原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// 单参数违规
    Violation {
        parameter: Parameter,
        kind: ReasonKind,
    },
    /// 全部参数处于理想范围（无违规时的固定原因）
    AllIdeal,
}

impl Reason {
    pub fn violation(parameter: Parameter, kind: ReasonKind) -> Self {
        Reason::Violation { parameter, kind }
    }

    /// 按当前语言渲染
    pub fn message(&self) -> String {
        self.message_in(&i18n::current_locale())
    }

    /// 按指定语言渲染
    ///
    /// # 示例
    /// ```
    /// use coal_viability::domain::{Parameter, Reason, ReasonKind};
    /// let reason = Reason::violation(Parameter::Pcs, ReasonKind::OutOfLimit);
    /// assert_eq!(reason.message_in("pt-BR"), "PCS fora do limite permitido");
    /// ```
    pub fn message_in(&self, locale: &str) -> String {
        match self {
            Reason::Violation { parameter, kind } => {
                let name = i18n::t_in(locale, parameter.i18n_key());
                i18n::t_with_args_in(locale, kind.i18n_key(), &[("param", name.as_str())])
            }
            Reason::AllIdeal => i18n::t_in(locale, "reason.all_ideal"),
        }
    }
}

// ==========================================
// EvaluationResult - 单样品评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    verdict: Verdict,
    reasons: Vec<Reason>,
    surcharge: Option<f64>,
}

impl EvaluationResult {
    /// 构造评估结果
    ///
    /// # 规则
    /// - reasons 为空时替换为单条 `Reason::AllIdeal`
    pub fn new(verdict: Verdict, reasons: Vec<Reason>, surcharge: Option<f64>) -> Self {
        let reasons = if reasons.is_empty() {
            vec![Reason::AllIdeal]
        } else {
            reasons
        };
        Self {
            verdict,
            reasons,
            surcharge,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// 按参数评估顺序排列的原因（至少一条）
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// 硫附加成本 (USD/t)
    pub fn surcharge(&self) -> Option<f64> {
        self.surcharge
    }

    /// 是否全部理想
    pub fn is_all_ideal(&self) -> bool {
        self.reasons == [Reason::AllIdeal]
    }

    /// 渲染后的原因列表
    pub fn messages_in(&self, locale: &str) -> Vec<String> {
        self.reasons.iter().map(|r| r.message_in(locale)).collect()
    }

    /// 单行说明（原因以 "; " 连接）
    pub fn justification_in(&self, locale: &str) -> String {
        self.messages_in(locale).join("; ")
    }

    pub fn justification(&self) -> String {
        self.justification_in(&i18n::current_locale())
    }
}
