//! JoinClause：JOIN 表或子查询，并以 ON 条件连接。

use crate::builder::Builder;
use crate::clause::{Clause, SubQuery};
use crate::condition::{Condition, Operator};
use crate::context::SqlContext;
use crate::name_item::TableItem;

/// 连接方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

#[derive(Debug, Clone)]
enum JoinTarget {
    Table(TableItem),
    Query(SubQuery),
    Sql(String),
}

#[derive(Debug, Clone)]
struct JoinItem {
    kind: JoinKind,
    target: JoinTarget,
    on: Condition,
}

impl JoinItem {
    fn validate(&self) -> bool {
        match &self.target {
            JoinTarget::Table(t) => t.validate(),
            JoinTarget::Query(_) | JoinTarget::Sql(_) => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JoinClause {
    ctx: SqlContext,
    items: Vec<JoinItem>,
}

impl JoinClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            items: Vec::new(),
        }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            items: self.items.clone(),
        }
    }

    pub fn join(&mut self, kind: JoinKind, table: &str) -> &mut Self {
        let table = TableItem::new(table, self.ctx.dialect().clone());
        self.push(kind, JoinTarget::Table(table))
    }

    pub fn join_query(
        &mut self,
        kind: JoinKind,
        query: impl Builder + 'static,
        alias: &str,
    ) -> &mut Self {
        let sub = SubQuery::new(&self.ctx, Box::new(query), alias);
        self.push(kind, JoinTarget::Query(sub))
    }

    /// 原样 JOIN 目标，如 `"[b] ON [a].[id] = [b].[aid]"`。
    pub fn append(&mut self, kind: JoinKind, sql: &str) -> &mut Self {
        if sql.trim().is_empty() {
            return self;
        }
        let sql = self.ctx.replace_sql(sql);
        self.push(kind, JoinTarget::Sql(sql))
    }

    fn push(&mut self, kind: JoinKind, target: JoinTarget) -> &mut Self {
        self.items.push(JoinItem {
            kind,
            target,
            on: Condition::Empty,
        });
        self
    }

    /// 为最近一个 JOIN 追加 `left = right`（列对列）；没有 JOIN 时忽略。
    pub fn on(&mut self, left: &str, right: &str) -> &mut Self {
        self.on_with(left, right, Operator::Equal)
    }

    pub fn on_with(&mut self, left: &str, right: &str, operator: Operator) -> &mut Self {
        let left = self.ctx.safe_column(left);
        let right = self.ctx.safe_column(right);
        if left.is_empty() || right.is_empty() {
            return self;
        }
        let sql = format!("{left} {} {right}", operator.comparison());
        self.on_condition(Condition::Sql(sql))
    }

    /// 为最近一个 JOIN 追加原样 ON 条件。
    pub fn append_on(&mut self, sql: &str) -> &mut Self {
        let condition = Condition::sql(self.ctx.replace_sql(sql));
        self.on_condition(condition)
    }

    pub fn on_condition(&mut self, condition: Condition) -> &mut Self {
        if let Some(last) = self.items.last_mut() {
            let on = std::mem::take(&mut last.on);
            last.on = on.and(condition);
        }
        self
    }

    /// 解析失败的 JOIN 表名。
    pub(crate) fn invalid_tables(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.validate())
            .map(|item| match &item.target {
                JoinTarget::Table(t) => t.raw().to_string(),
                _ => String::new(),
            })
            .collect()
    }
}

impl Clause for JoinClause {
    fn validate(&self) -> bool {
        self.items.iter().any(JoinItem::validate)
    }

    fn append_to(&self, buf: &mut String) {
        let alias_keyword = self.ctx.dialect().table_alias_keyword();
        let mut first = true;
        for item in self.items.iter().filter(|item| item.validate()) {
            if !first {
                buf.push('\n');
            }
            first = false;
            buf.push_str(item.kind.keyword());
            buf.push(' ');
            match &item.target {
                JoinTarget::Table(t) => t.append_to(buf),
                JoinTarget::Query(q) => q.append_to(buf, alias_keyword),
                JoinTarget::Sql(sql) => buf.push_str(sql),
            }
            if !item.on.is_empty() {
                buf.push_str(" ON ");
                item.on.append_to(buf);
            }
        }
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
