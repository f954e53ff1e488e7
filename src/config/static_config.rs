// ==========================================
// 煤炭质量可行性评估 - 内置配置
// ==========================================
// 编译期常量配置，无需数据库
// ==========================================

use crate::config::criteria_config_trait::CriteriaConfigReader;
use crate::config::error::ConfigResult;
use crate::domain::criteria::CriteriaSet;
use crate::domain::surcharge::SurchargeTable;
use async_trait::async_trait;

/// 内置判定配置（可替换判定标准/成本表，便于测试）
#[derive(Debug, Clone, Default)]
pub struct StaticCriteriaConfig {
    criteria: CriteriaSet,
    surcharge_table: SurchargeTable,
}

impl StaticCriteriaConfig {
    /// 使用自定义判定标准与成本表
    ///
    /// 判定标准在构造时校验。
    pub fn new(criteria: CriteriaSet, surcharge_table: SurchargeTable) -> ConfigResult<Self> {
        criteria.validate()?;
        Ok(Self {
            criteria,
            surcharge_table,
        })
    }
}

#[async_trait]
impl CriteriaConfigReader for StaticCriteriaConfig {
    async fn get_criteria(&self) -> ConfigResult<CriteriaSet> {
        Ok(self.criteria)
    }

    async fn get_surcharge_table(&self) -> ConfigResult<SurchargeTable> {
        Ok(self.surcharge_table.clone())
    }
}
