//! InsertClause：`INSERT INTO [t] ([a], [b]) VALUES (...)`。

use crate::clause::Clause;
use crate::context::SqlContext;
use crate::name_item::TableItem;
use crate::value::SqlValue;

#[derive(Debug, Clone)]
pub struct InsertClause {
    ctx: SqlContext,
    table: Option<TableItem>,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl InsertClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            table: None,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            ..self.clone()
        }
    }

    /// 设置目标表与列清单（`"a, b, c"`）。
    pub fn insert(&mut self, table: &str, columns: &str) -> &mut Self {
        self.table = Some(TableItem::new(table, self.ctx.dialect().clone()));
        self.columns = self.ctx.safe_columns(columns);
        self
    }

    /// 追加一行值；多次调用生成多行 VALUES。
    pub fn values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        let row: Vec<String> = values
            .into_iter()
            .map(|v| self.ctx.add_param(v))
            .collect();
        if !row.is_empty() {
            self.rows.push(row);
        }
        self
    }

    pub fn table(&self) -> Option<&TableItem> {
        self.table.as_ref()
    }
}

impl Clause for InsertClause {
    fn validate(&self) -> bool {
        self.table.as_ref().is_some_and(TableItem::validate)
    }

    fn append_to(&self, buf: &mut String) {
        let Some(table) = &self.table else {
            return;
        };
        buf.push_str("INSERT INTO ");
        table.append_name_to(buf);
        if !self.columns.is_empty() {
            buf.push_str(" (");
            buf.push_str(&self.columns.join(", "));
            buf.push(')');
        }
        if self.rows.is_empty() {
            return;
        }
        buf.push_str("\nVALUES ");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push('(');
            buf.push_str(&row.join(", "));
            buf.push(')');
        }
    }

    fn clear(&mut self) {
        self.table = None;
        self.columns.clear();
        self.rows.clear();
    }
}
