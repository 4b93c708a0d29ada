//! 名称解析：把 `schema.table as alias` 形式的原始字符串拆成前缀、名称与别名。

use crate::dialect::Dialect;
use std::rc::Rc;

/// 按分隔符把字符串拆成左右两部分。
///
/// 只识别 1 或 2 段；超过 2 段时左右都为空。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitItem {
    left: Option<String>,
    right: Option<String>,
}

impl SplitItem {
    pub fn new(value: &str, separator: &str) -> Self {
        if separator.is_empty() {
            return Self::default();
        }
        let tokens: Vec<&str> = value
            .split(separator)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        match tokens.as_slice() {
            [left] => Self {
                left: Some(left.to_string()),
                right: None,
            },
            [left, right] => Self {
                left: Some(left.to_string()),
                right: Some(right.to_string()),
            },
            _ => Self::default(),
        }
    }

    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }
}

/// 解析后的名称：`{prefix}.{name} {alias}`。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameItem {
    prefix: Option<String>,
    name: Option<String>,
    alias: Option<String>,
}

impl NameItem {
    /// 解析原始名称，输入不合法时相应字段保持 `None`，不会报错。
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Self::default();
        }
        let alias_item = SplitItem::new(&normalized, " ");
        let Some(left) = alias_item.left() else {
            tracing::trace!(name = raw, "name dropped, too many tokens");
            return Self::default();
        };
        let name_item = SplitItem::new(left, ".");
        let (prefix, name) = match (name_item.left(), name_item.right()) {
            (Some(prefix), Some(name)) => (Some(prefix.to_string()), name.to_string()),
            (Some(name), None) => (None, name.to_string()),
            _ => {
                tracing::trace!(name = raw, "name dropped, too many parts");
                return Self::default();
            }
        };
        Self {
            prefix,
            name: Some(name),
            alias: alias_item.right().map(str::to_string),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// `[prefix].[name]`，无前缀时只有 `[name]`。
    pub fn safe_name(&self, dialect: &dyn Dialect) -> String {
        let name = dialect.safe_name(self.name().unwrap_or_default());
        match self.prefix() {
            Some(prefix) => format!("{}.{}", dialect.safe_name(prefix), name),
            None => name,
        }
    }

    pub fn safe_alias(&self, dialect: &dyn Dialect) -> String {
        dialect.safe_name(self.alias().unwrap_or_default())
    }
}

// 合并空白、去掉 ` as `（包括末尾悬空的 `as`）、把 ` .` / `. ` 归一为 `.`
fn normalize(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let joined = tokens
        .iter()
        .enumerate()
        .filter(|(i, t)| *i == 0 || !t.eq_ignore_ascii_case("as"))
        .map(|(_, t)| *t)
        .collect::<Vec<_>>()
        .join(" ");
    let mut s = joined;
    while s.contains(" .") || s.contains(". ") {
        s = s.replace(" .", ".").replace(". ", ".");
    }
    s
}

/// 从表达式末尾拆出 ` as alias`（不区分大小写）。
pub(crate) fn split_expression_alias(expr: &str) -> (String, Option<String>) {
    let expr = expr.trim();
    let lower = expr.to_ascii_lowercase();
    if let Some(pos) = lower.rfind(" as ") {
        let alias = expr[pos + 4..].trim();
        if !alias.is_empty() && !alias.contains(')') && !alias.contains(' ') {
            return (expr[..pos].trim().to_string(), Some(alias.to_string()));
        }
    }
    (expr.to_string(), None)
}

/// 按顶层逗号拆分列清单，括号内的逗号不参与拆分。
pub fn split_columns(columns: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in columns.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                out.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    out.push(current);
    out.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// 表名项。
#[derive(Debug, Clone)]
pub struct TableItem {
    raw: String,
    item: NameItem,
    dialect: Rc<dyn Dialect>,
}

impl TableItem {
    pub fn new(table: &str, dialect: Rc<dyn Dialect>) -> Self {
        Self {
            raw: table.to_string(),
            item: NameItem::new(table),
            dialect,
        }
    }

    pub fn with_alias(table: &str, alias: &str, dialect: Rc<dyn Dialect>) -> Self {
        let mut item = NameItem::new(table);
        if !alias.trim().is_empty() {
            item.alias = Some(alias.trim().to_string());
        }
        Self {
            raw: table.to_string(),
            item,
            dialect,
        }
    }

    /// 原始表名字符串。
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn item(&self) -> &NameItem {
        &self.item
    }

    /// 表名是否解析成功。
    pub fn validate(&self) -> bool {
        self.item.name().is_some()
    }

    pub fn append_to(&self, buf: &mut String) {
        let dialect = self.dialect.as_ref();
        buf.push_str(&self.item.safe_name(dialect));
        if self.item.alias().is_some() {
            append_alias(buf, dialect.table_alias_keyword(), &self.item.safe_alias(dialect));
        }
    }

    /// 不带别名的表名，用于 INSERT INTO。
    pub fn append_name_to(&self, buf: &mut String) {
        buf.push_str(&self.item.safe_name(self.dialect.as_ref()));
    }
}

pub(crate) fn append_alias(buf: &mut String, keyword: &str, alias: &str) {
    buf.push(' ');
    if !keyword.is_empty() {
        buf.push_str(keyword);
        buf.push(' ');
    }
    buf.push_str(alias);
}

/// 列名项；含 `(` 的表达式按原样输出，仅处理别名。
#[derive(Debug, Clone)]
pub struct ColumnItem {
    item: NameItem,
    expression: Option<String>,
    dialect: Rc<dyn Dialect>,
}

impl ColumnItem {
    pub fn new(column: &str, dialect: Rc<dyn Dialect>) -> Self {
        if column.contains('(') {
            let (expr, alias) = split_expression_alias(column);
            return Self {
                item: NameItem {
                    alias,
                    ..NameItem::default()
                },
                expression: Some(dialect.replace_sql(&expr)),
                dialect,
            };
        }
        Self {
            item: NameItem::new(column),
            expression: None,
            dialect,
        }
    }

    pub fn item(&self) -> &NameItem {
        &self.item
    }

    pub fn validate(&self) -> bool {
        self.expression.is_some() || self.item.name().is_some()
    }

    pub fn append_to(&self, buf: &mut String) {
        let dialect = self.dialect.as_ref();
        match &self.expression {
            Some(expr) => buf.push_str(expr),
            None => buf.push_str(&self.item.safe_name(dialect)),
        }
        if self.item.alias().is_some() {
            append_alias(buf, "AS", &self.item.safe_alias(dialect));
        }
    }

    pub fn to_sql(&self) -> String {
        let mut s = String::new();
        self.append_to(&mut s);
        s
    }
}
