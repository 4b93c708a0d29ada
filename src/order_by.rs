//! OrderByClause：`ORDER BY [a] DESC, [b]`。

use crate::clause::Clause;
use crate::context::SqlContext;
use crate::macros::{IntoStrings, collect_into_strings};
use crate::name_item::split_columns;

#[derive(Debug, Clone)]
pub struct OrderByClause {
    ctx: SqlContext,
    items: Vec<String>,
}

impl OrderByClause {
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

    /// 追加排序项，如 `"a desc, t.b"`；方向不区分大小写。
    pub fn order_by<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        for columns in collect_into_strings(columns) {
            for item in split_columns(&columns) {
                let (column, desc) = split_direction(&item);
                self.push(column, desc);
            }
        }
        self
    }

    pub fn order_by_desc(&mut self, column: &str) -> &mut Self {
        self.push(column, true)
    }

    pub fn append(&mut self, sql: &str) -> &mut Self {
        if !sql.trim().is_empty() {
            self.items.push(self.ctx.replace_sql(sql));
        }
        self
    }

    fn push(&mut self, column: &str, desc: bool) -> &mut Self {
        let column = self.ctx.safe_column(column);
        if column.is_empty() {
            return self;
        }
        if desc {
            self.items.push(format!("{column} DESC"));
        } else {
            self.items.push(column);
        }
        self
    }
}

fn split_direction(item: &str) -> (&str, bool) {
    let item = item.trim();
    if let Some((column, direction)) = item.rsplit_once(char::is_whitespace) {
        if direction.eq_ignore_ascii_case("desc") {
            return (column.trim_end(), true);
        }
        if direction.eq_ignore_ascii_case("asc") {
            return (column.trim_end(), false);
        }
    }
    (item, false)
}

impl Clause for OrderByClause {
    fn validate(&self) -> bool {
        !self.items.is_empty()
    }

    fn append_to(&self, buf: &mut String) {
        buf.push_str("ORDER BY ");
        buf.push_str(&self.items.join(", "));
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
