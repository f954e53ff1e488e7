// ==========================================
// 煤炭质量可行性评估 - 领域类型定义
// ==========================================
// 红线: 判定为等级制（绿/黄/红），不是评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 可行性结论 (Verdict)
// ==========================================
// 顺序: Ok < Warning < Reject（取最差者）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Ok,      // 绿: 全部参数理想
    Warning, // 黄: 存在偏离理想值的参数
    Reject,  // 红: 存在超出允许限值的参数
}

impl Verdict {
    /// 结论升级: 只升不降
    ///
    /// Reject 一旦出现即吸收后续所有结论；Warning 重复设置无影响。
    pub fn escalate(self, other: Verdict) -> Verdict {
        self.max(other)
    }

    /// 国际化键（渲染层使用: Verde / Amarelo / Vermelho）
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Verdict::Ok => "verdict.ok",
            Verdict::Warning => "verdict.warning",
            Verdict::Reject => "verdict.reject",
        }
    }

    /// 从字符串解析结论
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Some(Verdict::Ok),
            "WARNING" => Some(Verdict::Warning),
            "REJECT" => Some(Verdict::Reject),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "OK"),
            Verdict::Warning => write!(f, "WARNING"),
            Verdict::Reject => write!(f, "REJECT"),
        }
    }
}

// ==========================================
// 单参数所处区间 (Band)
// ==========================================
// 绿区: 理想; 黄区: 偏离理想但未超限; 红区: 超出允许限值
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    Green,
    Yellow,
    Red,
}

impl Band {
    /// 区间对应的结论
    pub fn verdict(&self) -> Verdict {
        match self {
            Band::Green => Verdict::Ok,
            Band::Yellow => Verdict::Warning,
            Band::Red => Verdict::Reject,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Green => write!(f, "GREEN"),
            Band::Yellow => write!(f, "YELLOW"),
            Band::Red => write!(f, "RED"),
        }
    }
}

// ==========================================
// 判定方向 (Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    HigherIsBetter, // 越高越好（发热量）
    LowerIsBetter,  // 越低越好（灰分/水分/硫分）
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::HigherIsBetter => write!(f, "HIGHER_IS_BETTER"),
            Direction::LowerIsBetter => write!(f, "LOWER_IS_BETTER"),
        }
    }
}

// ==========================================
// 质量参数 (Parameter)
// ==========================================
// 评估顺序固定: PCS → PCI → 灰分 → 水分 → 硫分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Parameter {
    Pcs,      // 高位发热量 kcal/kg
    Pci,      // 低位发热量 kcal/kg
    Ash,      // 灰分 %
    Moisture, // 水分 %
    Sulfur,   // 硫分 %
}

impl Parameter {
    /// 固定评估顺序
    pub const ALL: [Parameter; 5] = [
        Parameter::Pcs,
        Parameter::Pci,
        Parameter::Ash,
        Parameter::Moisture,
        Parameter::Sulfur,
    ];

    /// 参数判定方向
    pub fn direction(&self) -> Direction {
        match self {
            Parameter::Pcs | Parameter::Pci => Direction::HigherIsBetter,
            Parameter::Ash | Parameter::Moisture | Parameter::Sulfur => Direction::LowerIsBetter,
        }
    }

    /// 配置键片段（config_kv: criteria/{key}/{field}）
    pub fn config_key(&self) -> &'static str {
        match self {
            Parameter::Pcs => "pcs",
            Parameter::Pci => "pci",
            Parameter::Ash => "ash",
            Parameter::Moisture => "moisture",
            Parameter::Sulfur => "sulfur",
        }
    }

    /// 国际化键（参数显示名）
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Parameter::Pcs => "parameter.pcs",
            Parameter::Pci => "parameter.pci",
            Parameter::Ash => "parameter.ash",
            Parameter::Moisture => "parameter.moisture",
            Parameter::Sulfur => "parameter.sulfur",
        }
    }

    /// 计量单位
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Pcs | Parameter::Pci => "kcal/kg",
            Parameter::Ash | Parameter::Moisture | Parameter::Sulfur => "%",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Pcs => write!(f, "PCS"),
            Parameter::Pci => write!(f, "PCI"),
            Parameter::Ash => write!(f, "ASH"),
            Parameter::Moisture => write!(f, "MOISTURE"),
            Parameter::Sulfur => write!(f, "SULFUR"),
        }
    }
}
