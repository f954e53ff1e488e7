// ==========================================
// 煤炭质量可行性评估 - 配置管理器
// ==========================================
// 职责: 判定标准与附加成本表的加载、覆写、快照
// 存储: config_kv 表 (key-value + scope)
// ==========================================
// 缺失的键 → 使用内置默认值
// 无法解析的值 → 记录 warn 日志并使用默认值
// 解析成功但语义非法（阈值顺序、非正成本）→ 返回错误
// ==========================================

use crate::config::criteria_config_trait::CriteriaConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use crate::db::{configure_sqlite_connection, ensure_config_schema, open_sqlite_connection};
use crate::domain::criteria::{CriteriaSet, Criterion};
use crate::domain::surcharge::SurchargeTable;
use crate::domain::types::Parameter;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    use crate::domain::types::Parameter;

    /// 附加成本表（JSON: {"0.61": 4.97, ...}）
    pub const SURCHARGE_TABLE: &str = "surcharge_table";

    /// 判定标准前缀
    pub const CRITERIA_PREFIX: &str = "criteria/";

    /// 快照元信息前缀（不回写到 config_kv）
    pub const META_PREFIX: &str = "__meta_";

    /// 判定标准键: criteria/{parameter}/{field}
    pub fn criterion_key(parameter: Parameter, field: &str) -> String {
        format!("{}{}/{}", CRITERIA_PREFIX, parameter.config_key(), field)
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（配置表不存在时自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| ConfigError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    fn lock(&self) -> ConfigResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    /// 读取 global scope 的配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_global_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.lock()?;
        read_global_value(&conn, key)
    }

    /// 写入 global scope 的配置值（UPSERT）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        tracing::debug!(key, value, "配置已写入");
        Ok(())
    }

    /// 保存整套判定标准（先校验）
    pub fn save_criteria(&self, criteria: &CriteriaSet) -> ConfigResult<()> {
        criteria.validate()?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        for parameter in Parameter::ALL {
            for (field, value) in criterion_fields(criteria.get(parameter)) {
                tx.execute(
                    "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                     ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
                    params![config_keys::criterion_key(parameter, field), value.to_string()],
                )?;
            }
        }
        tx.commit()?;

        tracing::info!("判定标准已保存");
        Ok(())
    }

    /// 保存附加成本表
    pub fn save_surcharge_table(&self, table: &SurchargeTable) -> ConfigResult<()> {
        let raw = serde_json::to_string(&table.to_text_map())?;
        self.set_global_config_value(config_keys::SURCHARGE_TABLE, &raw)?;
        tracing::info!(entries = table.len(), "附加成本表已保存");
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 记录某次评估使用的配置，便于复核
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let conn = self.lock()?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// - 此方法会覆盖现有的 global 配置
    /// - `__meta_` 前缀的键为元信息，不回写
    /// - 恢复后的判定标准或成本表非法时不写入任何键，返回对应错误
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<usize> {
        let config_map: HashMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let mut count = 0;
        for (key, value) in config_map.iter() {
            if key.starts_with(config_keys::META_PREFIX) {
                continue;
            }
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
                params![key, value],
            )?;
        }

        // 提交前按恢复后的内容重新装配，非法快照整体回滚
        load_criteria(&tx)?;
        load_surcharge_table(&tx)?;

        tx.commit()?;
        tracing::info!(restored = count, "配置已从快照恢复");
        Ok(count)
    }
}

/// 判定标准 → (字段名, 值) 列表
fn criterion_fields(criterion: &Criterion) -> [(&'static str, f64); 3] {
    match criterion {
        Criterion::HigherIsBetter {
            green_min,
            yellow_min,
            red_max,
        } => [
            ("green_min", *green_min),
            ("yellow_min", *yellow_min),
            ("red_max", *red_max),
        ],
        Criterion::LowerIsBetter {
            green_max,
            yellow_max,
            red_min,
        } => [
            ("green_max", *green_max),
            ("yellow_max", *yellow_max),
            ("red_min", *red_min),
        ],
    }
}

// ==========================================
// 配置装配（基于连接，供读取与快照恢复共用）
// ==========================================

fn read_global_value(conn: &Connection, key: &str) -> ConfigResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// 读取浮点配置，缺失或格式错误时使用默认值
fn read_f64_or_default(conn: &Connection, key: &str, default: f64) -> ConfigResult<f64> {
    let Some(raw) = read_global_value(conn, key)? else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) => Ok(v),
        Err(_) => {
            tracing::warn!(
                config_key = key,
                raw_value = %raw,
                default,
                "配置值格式错误，使用默认值"
            );
            Ok(default)
        }
    }
}

/// 装配并校验判定标准
fn load_criteria(conn: &Connection) -> ConfigResult<CriteriaSet> {
    let mut criteria = CriteriaSet::default();

    for parameter in Parameter::ALL {
        let [(f1, d1), (f2, d2), (f3, d3)] = criterion_fields(criteria.get(parameter));
        let v1 = read_f64_or_default(conn, &config_keys::criterion_key(parameter, f1), d1)?;
        let v2 = read_f64_or_default(conn, &config_keys::criterion_key(parameter, f2), d2)?;
        let v3 = read_f64_or_default(conn, &config_keys::criterion_key(parameter, f3), d3)?;

        let criterion = match criteria.get(parameter) {
            Criterion::HigherIsBetter { .. } => Criterion::HigherIsBetter {
                green_min: v1,
                yellow_min: v2,
                red_max: v3,
            },
            Criterion::LowerIsBetter { .. } => Criterion::LowerIsBetter {
                green_max: v1,
                yellow_max: v2,
                red_min: v3,
            },
        };
        criteria.set(parameter, criterion);
    }

    criteria.validate()?;
    Ok(criteria)
}

/// 装配附加成本表
fn load_surcharge_table(conn: &Connection) -> ConfigResult<SurchargeTable> {
    let Some(raw) = read_global_value(conn, config_keys::SURCHARGE_TABLE)? else {
        return Ok(SurchargeTable::default());
    };

    let text_map: BTreeMap<String, f64> = match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(
                config_key = config_keys::SURCHARGE_TABLE,
                raw_value = %raw,
                error = %e,
                "附加成本表配置格式错误，使用内置成本表"
            );
            return Ok(SurchargeTable::default());
        }
    };

    SurchargeTable::from_text_map(&text_map)
}

// ==========================================
// CriteriaConfigReader Trait 实现
// ==========================================
#[async_trait]
impl CriteriaConfigReader for ConfigManager {
    async fn get_criteria(&self) -> ConfigResult<CriteriaSet> {
        let conn = self.lock()?;
        load_criteria(&conn)
    }

    async fn get_surcharge_table(&self) -> ConfigResult<SurchargeTable> {
        let conn = self.lock()?;
        load_surcharge_table(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_criterion_key_format() {
        assert_eq!(
            config_keys::criterion_key(Parameter::Sulfur, "red_min"),
            "criteria/sulfur/red_min"
        );
    }

    #[tokio::test]
    async fn test_empty_store_uses_defaults() {
        let manager = in_memory_manager();
        assert_eq!(manager.get_criteria().await.unwrap(), CriteriaSet::default());
        assert_eq!(
            manager.get_surcharge_table().await.unwrap(),
            SurchargeTable::default()
        );
    }

    #[tokio::test]
    async fn test_single_field_override() {
        let manager = in_memory_manager();
        manager
            .set_global_config_value("criteria/ash/green_max", "8.5")
            .unwrap();

        let criteria = manager.get_criteria().await.unwrap();
        assert_eq!(criteria.ash.green_bound(), 8.5);
        assert_eq!(criteria.ash.red_bound(), 10.0);
    }

    #[tokio::test]
    async fn test_malformed_value_falls_back() {
        let manager = in_memory_manager();
        manager
            .set_global_config_value("criteria/pcs/green_min", "abc")
            .unwrap();

        let criteria = manager.get_criteria().await.unwrap();
        assert_eq!(criteria.pcs.green_bound(), 5800.0);
    }

    #[tokio::test]
    async fn test_invalid_order_is_error() {
        let manager = in_memory_manager();
        manager
            .set_global_config_value("criteria/pcs/red_max", "6000")
            .unwrap();

        assert!(matches!(
            manager.get_criteria().await,
            Err(ConfigError::ThresholdOrder { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_and_load_surcharge_table() {
        let manager = in_memory_manager();
        let table = SurchargeTable::from_entries(vec![(0.58, 3.1), (0.59, 3.2)]).unwrap();
        manager.save_surcharge_table(&table).unwrap();

        let loaded = manager.get_surcharge_table().await.unwrap();
        assert_eq!(loaded, table);
    }

    #[tokio::test]
    async fn test_malformed_surcharge_json_falls_back() {
        let manager = in_memory_manager();
        manager
            .set_global_config_value(config_keys::SURCHARGE_TABLE, "not json")
            .unwrap();

        assert_eq!(
            manager.get_surcharge_table().await.unwrap(),
            SurchargeTable::default()
        );
    }

    #[test]
    fn test_snapshot_and_restore_skip_meta() {
        let manager = in_memory_manager();
        manager
            .set_global_config_value("criteria/sulfur/green_max", "0.5")
            .unwrap();

        let snapshot = manager.get_config_snapshot().unwrap();
        assert!(snapshot.contains("criteria/sulfur/green_max"));

        let restore_json = r#"{"criteria/sulfur/green_max":"0.6","__meta_note":"x"}"#;
        let restored = manager.restore_config_from_snapshot(restore_json).unwrap();
        assert_eq!(restored, 1);
        assert_eq!(
            manager
                .get_global_config_value("criteria/sulfur/green_max")
                .unwrap(),
            Some("0.6".to_string())
        );
        assert_eq!(manager.get_global_config_value("__meta_note").unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_rolls_back_invalid_snapshot() {
        let manager = in_memory_manager();
        manager
            .set_global_config_value("criteria/ash/green_max", "8")
            .unwrap();

        // 绿区上限 12 高于红区下限 10
        let restore_json = r#"{"criteria/ash/green_max":"12","criteria/pcs/green_min":"5900"}"#;
        assert!(matches!(
            manager.restore_config_from_snapshot(restore_json),
            Err(ConfigError::ThresholdOrder { .. })
        ));

        assert_eq!(
            manager
                .get_global_config_value("criteria/ash/green_max")
                .unwrap(),
            Some("8".to_string())
        );
        assert_eq!(
            manager
                .get_global_config_value("criteria/pcs/green_min")
                .unwrap(),
            None
        );
        assert!(manager.get_criteria().await.is_ok());
    }
}
