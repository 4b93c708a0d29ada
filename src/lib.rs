//! util-sqlbuilder：方言感知的 SQL 语句构建器。
//!
//! 一条语句由九个子句组成，条件值统一登记为命名参数，标识符按数据库方言转义。

pub mod builder;
#[cfg(test)]
mod builder_tests;
pub mod clause;
pub mod column_cache;
pub mod condition;
pub mod context;
#[cfg(test)]
mod cte_tests;
pub mod database_type;
pub mod dialect;
pub mod end;
pub mod from;
pub mod group_by;
#[cfg(test)]
mod group_by_tests;
pub mod insert;
#[cfg(test)]
mod insert_tests;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod join;
#[cfg(test)]
mod join_tests;
pub mod macros;
pub mod name_item;
pub mod order_by;
pub mod parameter_manager;
#[cfg(test)]
mod parameter_manager_tests;
pub mod segment;
pub mod select;
#[cfg(test)]
mod select_tests;
pub mod start;
pub mod value;
pub mod where_clause;

pub use crate::builder::{Builder, SqlBuilder, SqlBuilderError};
pub use crate::clause::Clause;
pub use crate::column_cache::ColumnCache;
pub use crate::condition::{
    Condition, ConditionFactory, ConditionValue, Operator, SqlConditionFactory,
};
pub use crate::context::SqlContext;
pub use crate::database_type::{
    DatabaseType, DefaultDatabaseTypeGuard, ParseDatabaseTypeError, default_database_type,
    set_default_database_type, set_default_database_type_scoped,
};
pub use crate::dialect::{
    Dialect, MySqlDialect, OracleDialect, PgSqlDialect, SqlServerDialect, SqliteDialect,
};
pub use crate::end::EndClause;
pub use crate::from::FromClause;
pub use crate::group_by::GroupByClause;
pub use crate::insert::InsertClause;
pub use crate::interpolate::interpolate;
pub use crate::join::{JoinClause, JoinKind};
pub use crate::macros::IntoStrings;
#[doc(hidden)]
pub use crate::macros::{collect_into_strings, extend_into_strings};
pub use crate::name_item::{ColumnItem, NameItem, SplitItem, TableItem, split_columns};
pub use crate::order_by::OrderByClause;
pub use crate::parameter_manager::{
    ParameterDirection, ParameterManager, ParameterManagerRef, SqlParam,
};
pub use crate::segment::{Boundary, Segment, SegmentBound};
pub use crate::select::SelectClause;
pub use crate::start::StartClause;
pub use crate::value::SqlValue;
pub use crate::where_clause::WhereClause;
