// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use coal_viability::config::{ConfigError, ConfigResult, CriteriaConfigReader};
use coal_viability::domain::{CriteriaSet, Criterion, Parameter, SurchargeTable};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock 配置结构
#[derive(Debug)]
pub struct MockConfig {
    pub criteria: CriteriaSet,
    pub surcharge_table: SurchargeTable,
    /// 为 true 时所有读取返回锁错误
    pub fail: bool,
    /// 读取次数统计
    pub reads: AtomicUsize,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            criteria: CriteriaSet::default(),
            surcharge_table: SurchargeTable::default(),
            fail: false,
            reads: AtomicUsize::new(0),
        }
    }

    /// 创建读取失败的配置
    pub fn failing() -> Self {
        let mut config = Self::default();
        config.fail = true;
        config
    }

    /// 收紧硫分标准: 理想上限 0.4，允许上限 0.5
    pub fn strict_sulfur() -> Self {
        let mut config = Self::default();
        config.criteria.set(
            Parameter::Sulfur,
            Criterion::LowerIsBetter {
                green_max: 0.4,
                yellow_max: 0.5,
                red_min: 0.5,
            },
        );
        config.surcharge_table =
            SurchargeTable::from_entries(vec![(0.45, 1.25), (0.46, 1.30)]).unwrap();
        config
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check(&self) -> ConfigResult<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ConfigError::LockError("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CriteriaConfigReader for MockConfig {
    async fn get_criteria(&self) -> ConfigResult<CriteriaSet> {
        self.check()?;
        Ok(self.criteria)
    }

    async fn get_surcharge_table(&self) -> ConfigResult<SurchargeTable> {
        self.check()?;
        Ok(self.surcharge_table.clone())
    }
}
