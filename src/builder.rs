//! SqlBuilder：持有九个子句，按固定顺序渲染最终 SQL。
//!
//! 渲染顺序为 start → insert → select → from → join → where → group by → order by → end，
//! `validate()` 为 false 的子句整体跳过，子句之间以换行分隔。

use crate::clause::Clause;
use crate::condition::{Condition, ConditionValue, Operator, SqlConditionFactory};
use crate::context::SqlContext;
use crate::database_type::{DatabaseType, default_database_type};
use crate::dialect::Dialect;
use crate::end::EndClause;
use crate::from::FromClause;
use crate::group_by::GroupByClause;
use crate::insert::InsertClause;
use crate::interpolate::interpolate;
use crate::join::{JoinClause, JoinKind};
use crate::macros::IntoStrings;
use crate::order_by::OrderByClause;
use crate::parameter_manager::{ParameterManager, ParameterManagerRef, SqlParam};
use crate::segment::{Segment, SegmentBound};
use crate::select::SelectClause;
use crate::start::StartClause;
use crate::value::SqlValue;
use crate::where_clause::WhereClause;
use dyn_clone::DynClone;
use std::cell::Ref;
use std::fmt;
use std::rc::Rc;

const LINE_SEPARATOR: char = '\n';

/// 可嵌套渲染的 SQL 语句，用于子查询、CTE、EXISTS 等。
pub trait Builder: DynClone + fmt::Debug {
    fn append_to(&self, buf: &mut String);

    /// 语句中参数所登记的管理器；被嵌入另一条语句时据此判断是否需要重新登记参数。
    fn parameter_source(&self) -> Option<&ParameterManagerRef> {
        None
    }

    fn to_sql(&self) -> String {
        let mut buf = String::new();
        self.append_to(&mut buf);
        buf
    }
}

dyn_clone::clone_trait_object!(Builder);

impl Builder for Box<dyn Builder> {
    fn append_to(&self, buf: &mut String) {
        (**self).append_to(buf)
    }

    fn parameter_source(&self) -> Option<&ParameterManagerRef> {
        (**self).parameter_source()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SqlBuilderError {
    #[error("invalid table name in FROM clause: `{0}`")]
    InvalidFromTable(String),
    #[error("invalid table name in INSERT clause: `{0}`")]
    InvalidInsertTable(String),
    #[error("invalid table name in JOIN clause: `{0}`")]
    InvalidJoinTable(String),
}

/// SQL 生成器。
///
/// 每个实例只服务于一次语句构建，不跨线程共享；需要在同一基础查询上派生多个变体时使用 `clone()`。
#[derive(Debug)]
pub struct SqlBuilder {
    ctx: SqlContext,
    start: StartClause,
    insert: InsertClause,
    select: SelectClause,
    from: FromClause,
    join: JoinClause,
    where_clause: WhereClause,
    group_by: GroupByClause,
    order_by: OrderByClause,
    end: EndClause,
}

impl SqlBuilder {
    pub fn new(database_type: DatabaseType) -> Self {
        Self::with_dialect(database_type.dialect())
    }

    pub fn with_dialect(dialect: Rc<dyn Dialect>) -> Self {
        Self::with_context(SqlContext::new(dialect))
    }

    fn with_context(ctx: SqlContext) -> Self {
        Self {
            start: StartClause::new(ctx.clone()),
            insert: InsertClause::new(ctx.clone()),
            select: SelectClause::new(ctx.clone()),
            from: FromClause::new(ctx.clone()),
            join: JoinClause::new(ctx.clone()),
            where_clause: WhereClause::new(ctx.clone()),
            group_by: GroupByClause::new(ctx.clone()),
            order_by: OrderByClause::new(ctx.clone()),
            end: EndClause::new(ctx.clone()),
            ctx,
        }
    }

    pub fn sql_server() -> Self {
        Self::new(DatabaseType::SqlServer)
    }

    pub fn mysql() -> Self {
        Self::new(DatabaseType::MySql)
    }

    pub fn pgsql() -> Self {
        Self::new(DatabaseType::PgSql)
    }

    pub fn oracle() -> Self {
        Self::new(DatabaseType::Oracle)
    }

    pub fn sqlite() -> Self {
        Self::new(DatabaseType::Sqlite)
    }

    /// 创建同方言的新 builder，与当前 builder 共享参数管理器，用于构造子查询。
    pub fn new_builder(&self) -> SqlBuilder {
        Self::with_context(self.ctx.clone())
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.ctx.dialect().as_ref()
    }

    pub fn database_type(&self) -> DatabaseType {
        self.dialect().database_type()
    }

    pub fn context(&self) -> &SqlContext {
        &self.ctx
    }

    pub fn parameter_manager(&self) -> Ref<'_, ParameterManager> {
        self.ctx.params().borrow()
    }

    /// 按登记顺序返回参数。
    pub fn params(&self) -> Vec<SqlParam> {
        self.ctx.params().borrow().params().cloned().collect()
    }

    /// 登记命名参数，供原样 SQL 片段引用。
    pub fn add_param(&mut self, name: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.ctx.params().borrow_mut().add(name, value);
        self
    }

    pub fn condition_factory(&self) -> SqlConditionFactory<'_> {
        SqlConditionFactory::new(&self.ctx)
    }

    pub fn start_clause(&self) -> &StartClause {
        &self.start
    }

    pub fn start_clause_mut(&mut self) -> &mut StartClause {
        &mut self.start
    }

    pub fn insert_clause(&self) -> &InsertClause {
        &self.insert
    }

    pub fn insert_clause_mut(&mut self) -> &mut InsertClause {
        &mut self.insert
    }

    pub fn select_clause(&self) -> &SelectClause {
        &self.select
    }

    pub fn select_clause_mut(&mut self) -> &mut SelectClause {
        &mut self.select
    }

    pub fn from_clause(&self) -> &FromClause {
        &self.from
    }

    pub fn from_clause_mut(&mut self) -> &mut FromClause {
        &mut self.from
    }

    pub fn join_clause(&self) -> &JoinClause {
        &self.join
    }

    pub fn join_clause_mut(&mut self) -> &mut JoinClause {
        &mut self.join
    }

    pub fn where_clause(&self) -> &WhereClause {
        &self.where_clause
    }

    pub fn where_clause_mut(&mut self) -> &mut WhereClause {
        &mut self.where_clause
    }

    pub fn group_by_clause(&self) -> &GroupByClause {
        &self.group_by
    }

    pub fn group_by_clause_mut(&mut self) -> &mut GroupByClause {
        &mut self.group_by
    }

    pub fn order_by_clause(&self) -> &OrderByClause {
        &self.order_by
    }

    pub fn order_by_clause_mut(&mut self) -> &mut OrderByClause {
        &mut self.order_by
    }

    pub fn end_clause(&self) -> &EndClause {
        &self.end
    }

    pub fn end_clause_mut(&mut self) -> &mut EndClause {
        &mut self.end
    }

    pub fn append_start(&mut self, sql: &str) -> &mut Self {
        self.start.append(sql);
        self
    }

    pub fn cte(&mut self, name: &str, query: impl Builder + 'static) -> &mut Self {
        self.start.cte(name, query);
        self
    }

    pub fn insert(&mut self, table: &str, columns: &str) -> &mut Self {
        self.insert.insert(table, columns);
        self
    }

    pub fn values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        self.insert.values(values);
        self
    }

    pub fn select<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.select.select(columns);
        self
    }

    pub fn append_select(&mut self, sql: &str) -> &mut Self {
        self.select.append(sql);
        self
    }

    pub fn select_query(&mut self, query: impl Builder + 'static, alias: &str) -> &mut Self {
        self.select.select_query(query, alias);
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.select.distinct();
        self
    }

    pub fn from(&mut self, table: &str) -> &mut Self {
        self.from.from(table);
        self
    }

    pub fn from_query(&mut self, query: impl Builder + 'static, alias: &str) -> &mut Self {
        self.from.from_query(query, alias);
        self
    }

    pub fn append_from(&mut self, sql: &str) -> &mut Self {
        self.from.append(sql);
        self
    }

    pub fn join(&mut self, table: &str) -> &mut Self {
        self.join.join(JoinKind::Inner, table);
        self
    }

    pub fn left_join(&mut self, table: &str) -> &mut Self {
        self.join.join(JoinKind::Left, table);
        self
    }

    pub fn right_join(&mut self, table: &str) -> &mut Self {
        self.join.join(JoinKind::Right, table);
        self
    }

    pub fn full_join(&mut self, table: &str) -> &mut Self {
        self.join.join(JoinKind::Full, table);
        self
    }

    pub fn join_query(
        &mut self,
        kind: JoinKind,
        query: impl Builder + 'static,
        alias: &str,
    ) -> &mut Self {
        self.join.join_query(kind, query, alias);
        self
    }

    pub fn append_join(&mut self, kind: JoinKind, sql: &str) -> &mut Self {
        self.join.append(kind, sql);
        self
    }

    pub fn on(&mut self, left: &str, right: &str) -> &mut Self {
        self.join.on(left, right);
        self
    }

    pub fn on_with(&mut self, left: &str, right: &str, operator: Operator) -> &mut Self {
        self.join.on_with(left, right, operator);
        self
    }

    pub fn append_on(&mut self, sql: &str) -> &mut Self {
        self.join.append_on(sql);
        self
    }

    pub fn where_(
        &mut self,
        column: &str,
        value: impl Into<ConditionValue>,
        operator: Operator,
    ) -> &mut Self {
        self.where_clause.where_(column, value, operator);
        self
    }

    pub fn where_if(
        &mut self,
        predicate: bool,
        column: &str,
        value: impl Into<ConditionValue>,
        operator: Operator,
    ) -> &mut Self {
        self.where_clause
            .where_if(predicate, column, value, operator);
        self
    }

    pub fn where_in(&mut self, column: &str, values: impl Into<ConditionValue>) -> &mut Self {
        self.where_clause.where_in(column, values);
        self
    }

    pub fn where_not_in(&mut self, column: &str, values: impl Into<ConditionValue>) -> &mut Self {
        self.where_clause.where_not_in(column, values);
        self
    }

    pub fn is_null(&mut self, column: &str) -> &mut Self {
        self.where_clause.is_null(column);
        self
    }

    pub fn is_not_null(&mut self, column: &str) -> &mut Self {
        self.where_clause.is_not_null(column);
        self
    }

    pub fn between<T: SegmentBound>(&mut self, column: &str, segment: &Segment<T>) -> &mut Self {
        self.where_clause.between(column, segment);
        self
    }

    pub fn exists(&mut self, query: impl Builder + 'static) -> &mut Self {
        self.where_clause.exists(query);
        self
    }

    pub fn not_exists(&mut self, query: impl Builder + 'static) -> &mut Self {
        self.where_clause.not_exists(query);
        self
    }

    pub fn and(&mut self, condition: Condition) -> &mut Self {
        self.where_clause.and(condition);
        self
    }

    pub fn or(&mut self, condition: Condition) -> &mut Self {
        self.where_clause.or(condition);
        self
    }

    pub fn append_where(&mut self, sql: &str) -> &mut Self {
        self.where_clause.append(sql);
        self
    }

    pub fn group_by<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.group_by.group_by(columns);
        self
    }

    pub fn having(
        &mut self,
        expression: &str,
        value: impl Into<ConditionValue>,
        operator: Operator,
    ) -> &mut Self {
        self.group_by.having(expression, value, operator);
        self
    }

    pub fn append_having(&mut self, sql: &str) -> &mut Self {
        self.group_by.append_having(sql);
        self
    }

    pub fn order_by<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.order_by.order_by(columns);
        self
    }

    pub fn order_by_desc(&mut self, column: &str) -> &mut Self {
        self.order_by.order_by_desc(column);
        self
    }

    pub fn append_order_by(&mut self, sql: &str) -> &mut Self {
        self.order_by.append(sql);
        self
    }

    pub fn skip(&mut self, count: usize) -> &mut Self {
        self.end.skip(count);
        self
    }

    pub fn take(&mut self, count: usize) -> &mut Self {
        self.end.take(count);
        self
    }

    pub fn page(&mut self, page: usize, page_size: usize) -> &mut Self {
        self.end.page(page, page_size);
        self
    }

    pub fn append_end(&mut self, sql: &str) -> &mut Self {
        self.end.append(sql);
        self
    }

    /// 生成最终 SQL。
    pub fn sql(&self) -> String {
        let sql = self.to_sql();
        tracing::debug!(
            database_type = %self.database_type(),
            params = self.ctx.params().borrow().len(),
            sql = %sql,
            "sql built"
        );
        sql
    }

    /// 把参数替换为字面量后的 SQL，仅用于日志与调试。
    pub fn debug_sql(&self) -> String {
        interpolate(
            &self.to_sql(),
            &self.ctx.params().borrow(),
            self.database_type(),
        )
    }

    /// 检查表名是否都能解析。
    pub fn validate(&self) -> Result<(), SqlBuilderError> {
        let result = self.check_tables();
        if let Err(err) = &result {
            tracing::warn!(error = %err, "sql builder validation failed");
        }
        result
    }

    fn check_tables(&self) -> Result<(), SqlBuilderError> {
        if let Some(table) = self.from.table()
            && !table.validate()
        {
            return Err(SqlBuilderError::InvalidFromTable(table.raw().to_string()));
        }
        if let Some(table) = self.insert.table()
            && !table.validate()
        {
            return Err(SqlBuilderError::InvalidInsertTable(table.raw().to_string()));
        }
        if let Some(raw) = self.join.invalid_tables().into_iter().next() {
            return Err(SqlBuilderError::InvalidJoinTable(raw));
        }
        Ok(())
    }

    /// 清空全部子句与参数，实例可继续复用。
    pub fn clear(&mut self) {
        self.start.clear();
        self.insert.clear();
        self.select.clear();
        self.from.clear();
        self.join.clear();
        self.where_clause.clear();
        self.group_by.clear();
        self.order_by.clear();
        self.end.clear();
        self.ctx.params().borrow_mut().clear();
        self.ctx.clear_columns();
        tracing::trace!("sql builder cleared");
    }
}

fn append_clause(buf: &mut String, clause: &dyn Clause) {
    if !clause.validate() {
        return;
    }
    clause.append_to(buf);
    buf.push(LINE_SEPARATOR);
}

impl Builder for SqlBuilder {
    fn parameter_source(&self) -> Option<&ParameterManagerRef> {
        Some(self.ctx.params())
    }

    fn append_to(&self, buf: &mut String) {
        let start = buf.len();
        append_clause(buf, &self.start);
        append_clause(buf, &self.insert);
        if self.select.validate() {
            append_clause(buf, &self.select);
        } else if self.from.validate() && !self.insert.validate() {
            buf.push_str("SELECT *");
            buf.push(LINE_SEPARATOR);
        }
        append_clause(buf, &self.from);
        append_clause(buf, &self.join);
        append_clause(buf, &self.where_clause);
        append_clause(buf, &self.group_by);
        if self.order_by.validate() {
            append_clause(buf, &self.order_by);
        } else if self.end.has_paging() && self.dialect().requires_order_by_for_paging() {
            buf.push_str("ORDER BY 1");
            buf.push(LINE_SEPARATOR);
        }
        append_clause(buf, &self.end);
        if buf.len() > start && buf.ends_with(LINE_SEPARATOR) {
            buf.pop();
        }
    }
}

impl Clone for SqlBuilder {
    /// 深拷贝子句与参数，只共享方言。
    fn clone(&self) -> Self {
        let ctx = self.ctx.fork();
        tracing::trace!(params = ctx.params().borrow().len(), "sql builder cloned");
        Self {
            start: self.start.clone_into(&ctx),
            insert: self.insert.clone_into(&ctx),
            select: self.select.clone_into(&ctx),
            from: self.from.clone_into(&ctx),
            join: self.join.clone_into(&ctx),
            where_clause: self.where_clause.clone_into(&ctx),
            group_by: self.group_by.clone_into(&ctx),
            order_by: self.order_by.clone_into(&ctx),
            end: self.end.clone_into(&ctx),
            ctx,
        }
    }
}

impl Default for SqlBuilder {
    fn default() -> Self {
        Self::new(default_database_type())
    }
}

impl fmt::Display for SqlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<SqlBuilder> for ConditionValue {
    fn from(v: SqlBuilder) -> Self {
        Self::Query(Box::new(v))
    }
}
