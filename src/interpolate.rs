//! SQL 插值：把命名参数替换为字面量，生成便于阅读的调试 SQL。
//!
//! 安全警告：插值结果只用于日志与排错，永远不要拿去执行。

use crate::database_type::DatabaseType;
use crate::dialect::Dialect;
use crate::parameter_manager::ParameterManager;
use crate::value::SqlValue;
use time::macros::format_description;

/// 替换 `sql` 中已登记的参数名；字符串字面量、带引号的标识符内部与未登记的名字保持原样。
pub fn interpolate(sql: &str, params: &ParameterManager, database_type: DatabaseType) -> String {
    let dialect = database_type.dialect();
    replace_params(sql, params.prefix(), dialect.as_ref(), |name, out| {
        match params.value(name) {
            Some(value) => {
                encode_value(out, value, database_type);
                true
            }
            None => false,
        }
    })
}

/// 扫描 `sql` 中以 `prefix` 开头的参数名并交给 `f` 输出；`f` 返回 false 时原样保留。
///
/// `'...'` 字面量与方言标识符（如 `[it's]`）内部不做替换。
pub(crate) fn replace_params<F>(sql: &str, prefix: &str, dialect: &dyn Dialect, mut f: F) -> String
where
    F: FnMut(&str, &mut String) -> bool,
{
    let opening = dialect.opening_identifier();
    let closing = dialect.closing_identifier();
    let mut out = String::with_capacity(sql.len());
    let mut in_quote = false;
    let mut i = 0usize;

    while i < sql.len() {
        let rest = &sql[i..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        if c == '\'' {
            in_quote = !in_quote;
            out.push(c);
            i += 1;
            continue;
        }

        if !in_quote && !opening.is_empty() && rest.starts_with(opening) {
            let body = &rest[opening.len()..];
            let span = match body.find(closing) {
                Some(pos) => opening.len() + pos + closing.len(),
                None => rest.len(),
            };
            out.push_str(&rest[..span]);
            i += span;
            continue;
        }

        if !in_quote && !prefix.is_empty() && rest.starts_with(prefix) {
            let ident_len = rest[prefix.len()..]
                .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                .unwrap_or(rest.len() - prefix.len());
            let name = &rest[..prefix.len() + ident_len];
            if ident_len > 0 && f(name, &mut out) {
                i += name.len();
                continue;
            }
        }

        out.push(c);
        i += c.len_utf8();
    }

    out
}

fn encode_value(out: &mut String, value: &SqlValue, database_type: DatabaseType) {
    match value {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => match database_type {
            DatabaseType::SqlServer | DatabaseType::Oracle | DatabaseType::Sqlite => {
                out.push_str(if *b { "1" } else { "0" })
            }
            DatabaseType::MySql | DatabaseType::PgSql => {
                out.push_str(if *b { "TRUE" } else { "FALSE" })
            }
        },
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::Decimal(d) => out.push_str(&d.to_string()),
        SqlValue::String(s) => quote_string(out, s, database_type),
        SqlValue::Bytes(b) => encode_bytes(out, b, database_type),
        SqlValue::Date(d) => {
            let text = d
                .format(format_description!("[year]-[month]-[day]"))
                .unwrap_or_default();
            match database_type {
                DatabaseType::Oracle => {
                    out.push_str("to_date('");
                    out.push_str(&text);
                    out.push_str("', 'YYYY-MM-DD')");
                }
                _ => quote_plain(out, &text),
            }
        }
        SqlValue::DateTime(dt) => {
            let text = dt
                .format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                ))
                .unwrap_or_default();
            match database_type {
                DatabaseType::Oracle => {
                    out.push_str("to_timestamp('");
                    out.push_str(&text);
                    out.push_str("', 'YYYY-MM-DD HH24:MI:SS')");
                }
                _ => quote_plain(out, &text),
            }
        }
        SqlValue::DateTimeOffset(dt) => {
            let text = dt
                .format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
                ))
                .unwrap_or_default();
            match database_type {
                DatabaseType::Oracle => {
                    out.push_str("to_timestamp_tz('");
                    out.push_str(&text);
                    out.push_str("', 'YYYY-MM-DD HH24:MI:SS TZH:TZM')");
                }
                _ => quote_plain(out, &text),
            }
        }
    }
}

fn quote_plain(out: &mut String, text: &str) {
    out.push('\'');
    out.push_str(text);
    out.push('\'');
}

fn quote_string(out: &mut String, s: &str, database_type: DatabaseType) {
    if database_type == DatabaseType::SqlServer {
        out.push('N');
    }
    out.push('\'');
    for ch in s.chars() {
        match (ch, database_type) {
            ('\\', DatabaseType::MySql) => out.push_str("\\\\"),
            ('\'', _) => out.push_str("''"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn encode_bytes(out: &mut String, data: &[u8], database_type: DatabaseType) {
    if data.is_empty() {
        out.push_str("NULL");
        return;
    }
    match database_type {
        DatabaseType::SqlServer => {
            out.push_str("0x");
            push_hex(out, data);
        }
        DatabaseType::MySql | DatabaseType::Sqlite => {
            out.push_str("X'");
            push_hex(out, data);
            out.push('\'');
        }
        DatabaseType::PgSql => {
            out.push_str("'\\x");
            push_hex(out, data);
            out.push_str("'::bytea");
        }
        DatabaseType::Oracle => {
            out.push_str("hextoraw('");
            push_hex(out, data);
            out.push_str("')");
        }
    }
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}
