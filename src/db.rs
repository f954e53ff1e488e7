// ==========================================
// 煤炭质量可行性评估 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 配置表 config_kv 的建表语句集中在此
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "COAL_VIABILITY_DB_PATH";

/// 配置表结构（scope_id + key 唯一）
pub const CONFIG_KV_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS config_kv (
    scope_id   TEXT NOT NULL DEFAULT 'global',
    key        TEXT NOT NULL,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (scope_id, key)
);
";

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建立配置表（幂等）
pub fn ensure_config_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CONFIG_KV_SCHEMA)
}

/// 默认数据库路径
///
/// # 规则
/// 1. 环境变量 COAL_VIABILITY_DB_PATH（非空）优先
/// 2. 用户数据目录下 coal-viability/coal_viability.db
/// 3. 无法获取数据目录 → 当前目录 ./coal_viability.db
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./coal_viability.db");
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("coal-viability");
        match std::fs::create_dir_all(&dir) {
            Ok(()) => path = dir.join("coal_viability.db"),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "无法创建数据目录，使用当前目录");
            }
        }
    }

    path.to_string_lossy().to_string()
}
