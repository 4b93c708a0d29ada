//! DatabaseType：数据库类型选择与全局默认值配置。

use crate::dialect::{
    Dialect, MySqlDialect, OracleDialect, PgSqlDialect, SqlServerDialect, SqliteDialect,
};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 支持的数据库类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatabaseType {
    #[default]
    SqlServer,
    MySql,
    PgSql,
    Oracle,
    Sqlite,
}

static DEFAULT_DATABASE_TYPE: AtomicU8 = AtomicU8::new(DatabaseType::SqlServer as u8);
static DEFAULT_DATABASE_TYPE_LOCK: Mutex<()> = Mutex::new(());

impl DatabaseType {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::SqlServer,
            1 => Self::MySql,
            2 => Self::PgSql,
            3 => Self::Oracle,
            4 => Self::Sqlite,
            _ => Self::SqlServer,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    /// 返回该数据库对应的方言（方言无状态，可在多个 builder 间共享）。
    pub fn dialect(self) -> Rc<dyn Dialect> {
        match self {
            Self::SqlServer => Rc::new(SqlServerDialect),
            Self::MySql => Rc::new(MySqlDialect),
            Self::PgSql => Rc::new(PgSqlDialect),
            Self::Oracle => Rc::new(OracleDialect),
            Self::Sqlite => Rc::new(SqliteDialect),
        }
    }
}

/// 获取当前全局默认数据库类型。
pub fn default_database_type() -> DatabaseType {
    DatabaseType::from_u8(DEFAULT_DATABASE_TYPE.load(Ordering::Relaxed))
}

/// 设置全局默认数据库类型，返回旧值。
pub fn set_default_database_type(database_type: DatabaseType) -> DatabaseType {
    let old = DEFAULT_DATABASE_TYPE.swap(database_type.to_u8(), Ordering::Relaxed);
    DatabaseType::from_u8(old)
}

/// 修改全局默认数据库类型的 RAII guard（持有全局锁，避免并行测试互相干扰）。
pub struct DefaultDatabaseTypeGuard {
    _lock: MutexGuard<'static, ()>,
    old: DatabaseType,
}

impl Drop for DefaultDatabaseTypeGuard {
    fn drop(&mut self) {
        set_default_database_type(self.old);
    }
}

/// 在一个作用域内临时设置默认数据库类型，退出作用域后自动恢复。
pub fn set_default_database_type_scoped(database_type: DatabaseType) -> DefaultDatabaseTypeGuard {
    let lock = DEFAULT_DATABASE_TYPE_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_database_type(database_type);
    DefaultDatabaseTypeGuard { _lock: lock, old }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SqlServer => "SqlServer",
            Self::MySql => "MySql",
            Self::PgSql => "PgSql",
            Self::Oracle => "Oracle",
            Self::Sqlite => "Sqlite",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown database type `{0}`")]
pub struct ParseDatabaseTypeError(pub String);

impl FromStr for DatabaseType {
    type Err = ParseDatabaseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "mysql" => Ok(Self::MySql),
            "pgsql" | "postgres" | "postgresql" => Ok(Self::PgSql),
            "oracle" => Ok(Self::Oracle),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(ParseDatabaseTypeError(s.to_string())),
        }
    }
}
