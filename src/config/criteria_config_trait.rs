// ==========================================
// 煤炭质量可行性评估 - 判定配置读取 Trait
// ==========================================
// 职责: 定义评估所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;
use crate::domain::criteria::CriteriaSet;
use crate::domain::surcharge::SurchargeTable;
use async_trait::async_trait;

// ==========================================
// CriteriaConfigReader Trait
// ==========================================
// 实现者:
// - StaticCriteriaConfig（内置常量）
// - ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait CriteriaConfigReader: Send + Sync {
    /// 获取五参数判定标准
    ///
    /// # 返回
    /// - 已校验的 CriteriaSet（绿/红边界顺序正确）
    ///
    /// # 默认值
    /// - CriteriaSet::default()
    async fn get_criteria(&self) -> ConfigResult<CriteriaSet>;

    /// 获取硫附加成本表
    ///
    /// # 默认值
    /// - 0.61 ~ 0.69，步长 0.01
    async fn get_surcharge_table(&self) -> ConfigResult<SurchargeTable>;
}
