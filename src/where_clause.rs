//! WhereClause：以 AND 组合条件，`or` 把已有条件整体与新条件取或。

use crate::builder::Builder;
use crate::clause::Clause;
use crate::condition::{
    Condition, ConditionFactory, ConditionValue, Operator, SqlConditionFactory,
};
use crate::context::SqlContext;
use crate::segment::{Segment, SegmentBound};

#[derive(Debug, Clone)]
pub struct WhereClause {
    ctx: SqlContext,
    condition: Condition,
}

impl WhereClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            condition: Condition::Empty,
        }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            condition: self.condition.clone(),
        }
    }

    pub fn factory(&self) -> SqlConditionFactory<'_> {
        SqlConditionFactory::new(&self.ctx)
    }

    /// 当前条件树。
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// `existing AND condition`
    pub fn and(&mut self, condition: Condition) -> &mut Self {
        let current = std::mem::take(&mut self.condition);
        self.condition = current.and(condition);
        self
    }

    /// `(existing OR condition)`
    pub fn or(&mut self, condition: Condition) -> &mut Self {
        let current = std::mem::take(&mut self.condition);
        self.condition = current.or(condition);
        self
    }

    /// 追加 `column operator value`；值为空时按条件工厂的规则忽略或转为 IS NULL。
    pub fn where_(
        &mut self,
        column: &str,
        value: impl Into<ConditionValue>,
        operator: Operator,
    ) -> &mut Self {
        let condition = self.factory().create(column, value.into(), operator);
        self.and(condition)
    }

    /// `predicate` 为 true 时才追加条件。
    pub fn where_if(
        &mut self,
        predicate: bool,
        column: &str,
        value: impl Into<ConditionValue>,
        operator: Operator,
    ) -> &mut Self {
        if !predicate {
            return self;
        }
        self.where_(column, value, operator)
    }

    pub fn where_in(&mut self, column: &str, values: impl Into<ConditionValue>) -> &mut Self {
        self.where_(column, values, Operator::In)
    }

    pub fn where_not_in(&mut self, column: &str, values: impl Into<ConditionValue>) -> &mut Self {
        self.where_(column, values, Operator::NotIn)
    }

    pub fn is_null(&mut self, column: &str) -> &mut Self {
        let condition = self.factory().is_null(column);
        self.and(condition)
    }

    pub fn is_not_null(&mut self, column: &str) -> &mut Self {
        let condition = self.factory().is_not_null(column);
        self.and(condition)
    }

    pub fn between<T: SegmentBound>(&mut self, column: &str, segment: &Segment<T>) -> &mut Self {
        let condition = self.factory().between(column, segment);
        self.and(condition)
    }

    pub fn exists(&mut self, query: impl Builder + 'static) -> &mut Self {
        let condition = self.factory().exists(query);
        self.and(condition)
    }

    pub fn not_exists(&mut self, query: impl Builder + 'static) -> &mut Self {
        let condition = self.factory().not_exists(query);
        self.and(condition)
    }

    /// 以 AND 追加原样 SQL 条件，`[x]` 会替换为方言引号。
    pub fn append(&mut self, sql: &str) -> &mut Self {
        let condition = self.factory().sql(sql);
        self.and(condition)
    }
}

impl Clause for WhereClause {
    fn validate(&self) -> bool {
        !self.condition.is_empty()
    }

    fn append_to(&self, buf: &mut String) {
        buf.push_str("WHERE ");
        self.condition.append_to(buf);
    }

    fn clear(&mut self) {
        self.condition = Condition::Empty;
    }
}
