// ==========================================
// 煤炭质量可行性评估 - 配置层
// ==========================================
// 职责: 判定标准与附加成本表的读取与覆写
// 存储: 内置常量 / config_kv 表
// ==========================================

pub mod config_manager;
pub mod criteria_config_trait;
pub mod error;
pub mod static_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager};
pub use criteria_config_trait::CriteriaConfigReader;
pub use error::{ConfigError, ConfigResult};
pub use static_config::StaticCriteriaConfig;
