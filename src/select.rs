//! SelectClause：SELECT 列清单。

use crate::builder::Builder;
use crate::clause::{Clause, SubQuery};
use crate::context::SqlContext;
use crate::macros::{IntoStrings, collect_into_strings};

#[derive(Debug, Clone)]
enum SelectItem {
    Column(String),
    Query(SubQuery),
}

#[derive(Debug, Clone)]
pub struct SelectClause {
    ctx: SqlContext,
    distinct: bool,
    items: Vec<SelectItem>,
}

impl SelectClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            distinct: false,
            items: Vec::new(),
        }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            ..self.clone()
        }
    }

    /// 追加列，每一项可以是 `"a, t.b as c"` 形式的逗号清单。
    pub fn select<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        for columns in collect_into_strings(columns) {
            let rendered = self.ctx.safe_columns(&columns);
            self.items
                .extend(rendered.into_iter().map(SelectItem::Column));
        }
        self
    }

    /// 追加原样 SQL 列表达式。
    pub fn append(&mut self, sql: &str) -> &mut Self {
        if !sql.trim().is_empty() {
            self.items
                .push(SelectItem::Column(self.ctx.replace_sql(sql)));
        }
        self
    }

    /// 追加子查询列：`(SELECT ...) AS [alias]`。
    pub fn select_query(&mut self, query: impl Builder + 'static, alias: &str) -> &mut Self {
        let sub = SubQuery::new(&self.ctx, Box::new(query), alias);
        self.items.push(SelectItem::Query(sub));
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }
}

impl Clause for SelectClause {
    fn validate(&self) -> bool {
        !self.items.is_empty()
    }

    fn append_to(&self, buf: &mut String) {
        buf.push_str("SELECT ");
        if self.distinct {
            buf.push_str("DISTINCT ");
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            match item {
                SelectItem::Column(c) => buf.push_str(c),
                SelectItem::Query(q) => q.append_to(buf, "AS"),
            }
        }
    }

    fn clear(&mut self) {
        self.distinct = false;
        self.items.clear();
    }
}
