// ==========================================
// 煤炭质量可行性评估 - 硫附加成本查询
// ==========================================
// 职责: 硫分 → 两位小数舍入 → 成本表精确匹配
// 红线: 无插值、无外推；未命中即"无附加成本"（正常结果，不是错误）
// ==========================================

use crate::domain::surcharge::SurchargeTable;
use std::sync::Arc;

// ==========================================
// SurchargeLookup - 附加成本查询
// ==========================================
#[derive(Debug, Clone)]
pub struct SurchargeLookup {
    table: Arc<SurchargeTable>,
}

impl SurchargeLookup {
    pub fn new(table: SurchargeTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// 共享已有成本表
    pub fn from_shared(table: Arc<SurchargeTable>) -> Self {
        Self { table }
    }

    /// 查询附加成本
    ///
    /// # 规则
    /// 1. sulfur_pct 舍入到两位小数（精确二进制值舍入，半数取偶）
    /// 2. 舍入值在表中 → 返回成本
    /// 3. 否则 → None
    ///
    /// # 示例
    /// ```
    /// use coal_viability::engine::SurchargeLookup;
    /// let lookup = SurchargeLookup::default();
    /// assert_eq!(lookup.surcharge_for(0.65), Some(5.24));
    /// assert_eq!(lookup.surcharge_for(0.72), None);
    /// ```
    pub fn surcharge_for(&self, sulfur_pct: f64) -> Option<f64> {
        let cost = self.table.lookup(sulfur_pct);
        tracing::trace!(
            sulfur_pct,
            rounded_key = ?SurchargeTable::key_for(sulfur_pct),
            cost = ?cost,
            "附加成本查询"
        );
        cost
    }

    pub fn table(&self) -> &SurchargeTable {
        &self.table
    }
}

impl Default for SurchargeLookup {
    fn default() -> Self {
        Self::new(SurchargeTable::default())
    }
}
