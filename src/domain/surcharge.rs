// ==========================================
// 煤炭质量可行性评估 - 硫附加成本表
// ==========================================
// 键: 硫分百分比舍入到两位小数; 值: 附加成本 (USD/t)
// 红线: 精确匹配，不插值、不取最近邻
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use std::collections::BTreeMap;

/// 内置附加成本表（键以百分之一为单位: 61 → 0.61%）
pub const DEFAULT_SURCHARGE_ENTRIES: [(i64, f64); 9] = [
    (61, 4.97),
    (62, 5.01),
    (63, 5.05),
    (64, 5.14),
    (65, 5.24),
    (66, 5.33),
    (67, 5.39),
    (68, 5.45),
    (69, 5.45),
];

/// 硫附加成本表
///
/// 内部以"百分之一"整数为键，避免浮点数作为 map 键时的相等性问题。
#[derive(Debug, Clone, PartialEq)]
pub struct SurchargeTable {
    entries: BTreeMap<i64, f64>,
}

impl SurchargeTable {
    /// 硫分 → 表键
    ///
    /// # 规则
    /// - 对 f64 的精确二进制值舍入到两位小数，恰为一半时取偶数（与成本表生成时的舍入一致）
    /// - 例: 0.605 → 0.60（二进制值略小于 0.605）; 0.625 → 0.62（恰为一半，取偶）
    /// - 非有限数（NaN/∞）无键
    pub fn key_for(sulfur_pct: f64) -> Option<i64> {
        if !sulfur_pct.is_finite() {
            return None;
        }
        // `{:.2}` 按精确十进制展开舍入（半数取偶）；结果再换算为百分之一整数
        let rounded: f64 = format!("{:.2}", sulfur_pct).parse().ok()?;
        Some((rounded * 100.0).round() as i64)
    }

    /// 表键 → 两位小数文本（"0.61"）
    pub fn format_key(key: i64) -> String {
        format!("{:.2}", key as f64 / 100.0)
    }

    /// 从 (硫分, 成本) 列表构建
    ///
    /// # 校验
    /// - 硫分必须为有限数
    /// - 成本必须为有限正数
    /// - 舍入后键不可重复
    pub fn from_entries<I>(entries: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut map = BTreeMap::new();
        for (sulfur_pct, cost) in entries {
            let key = Self::key_for(sulfur_pct)
                .ok_or_else(|| ConfigError::InvalidSurchargeKey(sulfur_pct.to_string()))?;
            if !(cost.is_finite() && cost > 0.0) {
                return Err(ConfigError::NonPositiveSurcharge {
                    key: Self::format_key(key),
                    cost,
                });
            }
            if map.insert(key, cost).is_some() {
                return Err(ConfigError::DuplicateSurchargeKey(Self::format_key(key)));
            }
        }
        Ok(Self { entries: map })
    }

    /// 从文本键映射构建（配置存储格式: {"0.61": 4.97, ...}）
    pub fn from_text_map(raw: &BTreeMap<String, f64>) -> ConfigResult<Self> {
        let mut parsed = Vec::with_capacity(raw.len());
        for (key, cost) in raw {
            let pct = key
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidSurchargeKey(key.clone()))?;
            parsed.push((pct, *cost));
        }
        Self::from_entries(parsed)
    }

    /// 转为文本键映射（用于快照与持久化）
    pub fn to_text_map(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|(key, cost)| (Self::format_key(*key), *cost))
            .collect()
    }

    /// 精确键查找
    pub fn get(&self, key: i64) -> Option<f64> {
        self.entries.get(&key).copied()
    }

    /// 按硫分查找（先舍入再精确匹配）
    pub fn lookup(&self, sulfur_pct: f64) -> Option<f64> {
        Self::key_for(sulfur_pct).and_then(|key| self.get(key))
    }

    /// 表项迭代（硫分, 成本），按硫分升序
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries
            .iter()
            .map(|(key, cost)| (*key as f64 / 100.0, *cost))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SurchargeTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SURCHARGE_ENTRIES.iter().copied().collect(),
        }
    }
}
