//! GroupByClause：GROUP BY 与 HAVING。

use crate::clause::Clause;
use crate::condition::{Condition, ConditionValue, Operator, SqlConditionFactory};
use crate::context::SqlContext;
use crate::macros::{IntoStrings, collect_into_strings};

#[derive(Debug, Clone)]
pub struct GroupByClause {
    ctx: SqlContext,
    columns: Vec<String>,
    having: Condition,
}

impl GroupByClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            columns: Vec::new(),
            having: Condition::Empty,
        }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            columns: self.columns.clone(),
            having: self.having.clone(),
        }
    }

    pub fn group_by<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        for columns in collect_into_strings(columns) {
            self.columns.extend(self.ctx.safe_columns(&columns));
        }
        self
    }

    pub fn append(&mut self, sql: &str) -> &mut Self {
        if !sql.trim().is_empty() {
            self.columns.push(self.ctx.replace_sql(sql));
        }
        self
    }

    /// `HAVING expression operator value`，表达式按原样输出（如 `COUNT(*)`）。
    pub fn having(
        &mut self,
        expression: &str,
        value: impl Into<ConditionValue>,
        operator: Operator,
    ) -> &mut Self {
        let expression = self.ctx.replace_sql(expression.trim());
        let condition = SqlConditionFactory::new(&self.ctx).create_for_rendered(
            expression,
            value.into(),
            operator,
        );
        self.and_having(condition)
    }

    pub fn append_having(&mut self, sql: &str) -> &mut Self {
        let condition = Condition::sql(self.ctx.replace_sql(sql));
        self.and_having(condition)
    }

    fn and_having(&mut self, condition: Condition) -> &mut Self {
        let current = std::mem::take(&mut self.having);
        self.having = current.and(condition);
        self
    }
}

impl Clause for GroupByClause {
    fn validate(&self) -> bool {
        !self.columns.is_empty()
    }

    fn append_to(&self, buf: &mut String) {
        buf.push_str("GROUP BY ");
        buf.push_str(&self.columns.join(", "));
        if !self.having.is_empty() {
            buf.push_str(" HAVING ");
            self.having.append_to(buf);
        }
    }

    fn clear(&mut self) {
        self.columns.clear();
        self.having = Condition::Empty;
    }
}
