//! FromClause：FROM 表、子查询或原样 SQL。

use crate::builder::Builder;
use crate::clause::{Clause, SubQuery};
use crate::context::SqlContext;
use crate::name_item::TableItem;

#[derive(Debug, Clone)]
enum FromSource {
    Table(TableItem),
    Query(SubQuery),
    Sql(String),
}

#[derive(Debug, Clone)]
pub struct FromClause {
    ctx: SqlContext,
    source: Option<FromSource>,
}

impl FromClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self { ctx, source: None }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            source: self.source.clone(),
        }
    }

    /// 设置表，支持 `schema.table alias` 与 `table as alias`。
    pub fn from(&mut self, table: &str) -> &mut Self {
        let item = TableItem::new(table, self.ctx.dialect().clone());
        self.source = Some(FromSource::Table(item));
        self
    }

    pub fn from_with_alias(&mut self, table: &str, alias: &str) -> &mut Self {
        let item = TableItem::with_alias(table, alias, self.ctx.dialect().clone());
        self.source = Some(FromSource::Table(item));
        self
    }

    pub fn from_query(&mut self, query: impl Builder + 'static, alias: &str) -> &mut Self {
        let sub = SubQuery::new(&self.ctx, Box::new(query), alias);
        self.source = Some(FromSource::Query(sub));
        self
    }

    /// 原样 FROM 内容，`[x]` 会替换为方言引号。
    pub fn append(&mut self, sql: &str) -> &mut Self {
        if !sql.trim().is_empty() {
            self.source = Some(FromSource::Sql(self.ctx.replace_sql(sql)));
        }
        self
    }

    /// 当前表；来源为子查询或原样 SQL 时为 `None`。
    pub fn table(&self) -> Option<&TableItem> {
        match &self.source {
            Some(FromSource::Table(t)) => Some(t),
            _ => None,
        }
    }
}

impl Clause for FromClause {
    fn validate(&self) -> bool {
        match &self.source {
            Some(FromSource::Table(t)) => t.validate(),
            Some(FromSource::Query(_)) | Some(FromSource::Sql(_)) => true,
            None => false,
        }
    }

    fn append_to(&self, buf: &mut String) {
        let Some(source) = &self.source else {
            return;
        };
        buf.push_str("FROM ");
        match source {
            FromSource::Table(t) => t.append_to(buf),
            FromSource::Query(q) => q.append_to(buf, self.ctx.dialect().table_alias_keyword()),
            FromSource::Sql(sql) => buf.push_str(sql),
        }
    }

    fn clear(&mut self) {
        self.source = None;
    }
}
