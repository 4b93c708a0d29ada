//! SQL 方言：标识符引号、参数前缀与分页语法。

use crate::database_type::DatabaseType;
use std::fmt;

/// 各数据库的引号与转义规则。
///
/// 实现者只需提供标识符开闭符号与参数前缀，其余行为均有默认实现。
pub trait Dialect: fmt::Debug {
    fn database_type(&self) -> DatabaseType;

    /// 标识符起始符号，如 SQL Server 的 `[`。
    fn opening_identifier(&self) -> &str;

    /// 标识符结束符号，如 SQL Server 的 `]`。
    fn closing_identifier(&self) -> &str;

    /// 参数前缀，如 `@`、`:`。
    fn prefix(&self) -> &str;

    /// 表别名关键字；为空时表名与别名之间只用空格分隔。
    fn table_alias_keyword(&self) -> &str {
        "AS"
    }

    fn requires_order_by_for_paging(&self) -> bool {
        false
    }

    /// 获取安全名称：去掉已有的标识符符号后重新包裹。
    ///
    /// - 空白名称返回空串。
    /// - `*` 原样返回。
    fn safe_name(&self, name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            return String::new();
        }
        if name == "*" {
            return name.to_string();
        }
        let name = filter_name(name, self.opening_identifier(), self.closing_identifier());
        format!(
            "{}{}{}",
            self.opening_identifier(),
            name,
            self.closing_identifier()
        )
    }

    /// 把 `[x]` 形式的通用标识符替换为本方言的引号；`[[` / `]]` 保留为字面 `[` / `]`。
    fn replace_sql(&self, sql: &str) -> String {
        if sql.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(sql.len());
        let mut chars = sql.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '[' if chars.peek() == Some(&'[') => {
                    chars.next();
                    out.push('[');
                }
                ']' if chars.peek() == Some(&']') => {
                    chars.next();
                    out.push(']');
                }
                '[' => out.push_str(self.opening_identifier()),
                ']' => out.push_str(self.closing_identifier()),
                _ => out.push(c),
            }
        }
        out
    }

    /// 追加分页子句，`offset` 与 `limit` 为已注册的参数名。
    fn append_paging(&self, buf: &mut String, offset: &str, limit: &str) {
        buf.push_str("LIMIT ");
        buf.push_str(limit);
        buf.push_str(" OFFSET ");
        buf.push_str(offset);
    }
}

fn filter_name<'a>(name: &'a str, opening: &str, closing: &str) -> &'a str {
    let mut name = name.trim();
    loop {
        let trimmed = name
            .trim_start_matches(['[', '`', '"'])
            .trim_end_matches([']', '`', '"']);
        let trimmed = trimmed
            .strip_prefix(opening)
            .unwrap_or(trimmed)
            .strip_suffix(closing)
            .unwrap_or(trimmed)
            .trim();
        if trimmed.len() == name.len() {
            return trimmed;
        }
        name = trimmed;
    }
}

fn append_offset_fetch(buf: &mut String, offset: &str, limit: &str) {
    buf.push_str("OFFSET ");
    buf.push_str(offset);
    buf.push_str(" ROWS FETCH NEXT ");
    buf.push_str(limit);
    buf.push_str(" ROWS ONLY");
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerDialect;

impl Dialect for SqlServerDialect {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::SqlServer
    }

    fn opening_identifier(&self) -> &str {
        "["
    }

    fn closing_identifier(&self) -> &str {
        "]"
    }

    fn prefix(&self) -> &str {
        "@"
    }

    fn requires_order_by_for_paging(&self) -> bool {
        true
    }

    fn append_paging(&self, buf: &mut String, offset: &str, limit: &str) {
        append_offset_fetch(buf, offset, limit);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::MySql
    }

    fn opening_identifier(&self) -> &str {
        "`"
    }

    fn closing_identifier(&self) -> &str {
        "`"
    }

    fn prefix(&self) -> &str {
        "@"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PgSqlDialect;

impl Dialect for PgSqlDialect {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::PgSql
    }

    fn opening_identifier(&self) -> &str {
        "\""
    }

    fn closing_identifier(&self) -> &str {
        "\""
    }

    fn prefix(&self) -> &str {
        "@"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl Dialect for OracleDialect {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::Oracle
    }

    fn opening_identifier(&self) -> &str {
        "\""
    }

    fn closing_identifier(&self) -> &str {
        "\""
    }

    fn prefix(&self) -> &str {
        ":"
    }

    // Oracle 不允许 `table AS alias`
    fn table_alias_keyword(&self) -> &str {
        ""
    }

    fn append_paging(&self, buf: &mut String, offset: &str, limit: &str) {
        append_offset_fetch(buf, offset, limit);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl Dialect for SqliteDialect {
    fn database_type(&self) -> DatabaseType {
        DatabaseType::Sqlite
    }

    fn opening_identifier(&self) -> &str {
        "\""
    }

    fn closing_identifier(&self) -> &str {
        "\""
    }

    fn prefix(&self) -> &str {
        "@"
    }
}
