//! 条件与条件工厂：把列、值与运算符组合成参数化的谓词。

use crate::builder::Builder;
use crate::context::SqlContext;
use crate::segment::{Segment, SegmentBound};
use crate::value::SqlValue;
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// 条件运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    /// `LIKE '%v%'`
    Contains,
    /// `LIKE 'v%'`
    Starts,
    /// `LIKE '%v'`
    Ends,
    In,
    NotIn,
}

impl Operator {
    pub(crate) fn comparison(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Contains | Self::Starts | Self::Ends => "LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        }
    }

    fn like_pattern(self, text: &str) -> Option<String> {
        match self {
            Self::Contains => Some(format!("%{text}%")),
            Self::Starts => Some(format!("{text}%")),
            Self::Ends => Some(format!("%{text}")),
            _ => None,
        }
    }
}

/// 条件值：单值、列表或子查询。
#[derive(Debug, Clone)]
pub enum ConditionValue {
    Value(SqlValue),
    List(Vec<SqlValue>),
    Query(Box<dyn Builder>),
}

impl Default for ConditionValue {
    fn default() -> Self {
        Self::Value(SqlValue::Null)
    }
}

macro_rules! impl_condition_value_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for ConditionValue {
                fn from(v: $t) -> Self {
                    Self::Value(v.into())
                }
            }
        )*
    };
}

impl_condition_value_from!(
    SqlValue,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Decimal,
    String,
    &'static str,
    Date,
    PrimitiveDateTime,
    OffsetDateTime,
);

impl<T: Into<SqlValue>> From<Option<T>> for ConditionValue {
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for ConditionValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for ConditionValue {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Box<dyn Builder>> for ConditionValue {
    fn from(v: Box<dyn Builder>) -> Self {
        Self::Query(v)
    }
}

/// 渲染好的谓词树；列名与参数名在创建时已确定。
#[derive(Debug, Clone, Default)]
pub enum Condition {
    /// 不输出任何内容。
    #[default]
    Empty,
    Sql(String),
    Compare {
        column: String,
        operator: &'static str,
        param: String,
    },
    CompareQuery {
        column: String,
        operator: &'static str,
        query: Box<dyn Builder>,
    },
    IsNull(String),
    IsNotNull(String),
    In {
        column: String,
        params: Vec<String>,
        negated: bool,
    },
    InQuery {
        column: String,
        query: Box<dyn Builder>,
        negated: bool,
    },
    Exists {
        query: Box<dyn Builder>,
        negated: bool,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// 原样 SQL 条件，空白串视为空条件。
    pub fn sql(sql: impl Into<String>) -> Self {
        let sql = sql.into();
        if sql.trim().is_empty() {
            return Self::Empty;
        }
        Self::Sql(sql)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::And(l, r) | Self::Or(l, r) => l.is_empty() && r.is_empty(),
            _ => false,
        }
    }

    /// `self AND other`，空的一侧被忽略。
    pub fn and(self, other: Condition) -> Condition {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => other,
            (_, true) => self,
            _ => Self::And(Box::new(self), Box::new(other)),
        }
    }

    /// `(self OR other)`，空的一侧被忽略。
    pub fn or(self, other: Condition) -> Condition {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => other,
            (_, true) => self,
            _ => Self::Or(Box::new(self), Box::new(other)),
        }
    }

    pub fn append_to(&self, buf: &mut String) {
        match self {
            Self::Empty => {}
            Self::Sql(sql) => buf.push_str(sql),
            Self::Compare {
                column,
                operator,
                param,
            } => {
                buf.push_str(column);
                buf.push(' ');
                buf.push_str(operator);
                buf.push(' ');
                buf.push_str(param);
            }
            Self::CompareQuery {
                column,
                operator,
                query,
            } => {
                buf.push_str(column);
                buf.push(' ');
                buf.push_str(operator);
                buf.push_str(" (");
                query.append_to(buf);
                buf.push(')');
            }
            Self::IsNull(column) => {
                buf.push_str(column);
                buf.push_str(" IS NULL");
            }
            Self::IsNotNull(column) => {
                buf.push_str(column);
                buf.push_str(" IS NOT NULL");
            }
            Self::In {
                column,
                params,
                negated,
            } => {
                buf.push_str(column);
                buf.push_str(if *negated { " NOT IN (" } else { " IN (" });
                buf.push_str(&params.join(", "));
                buf.push(')');
            }
            Self::InQuery {
                column,
                query,
                negated,
            } => {
                buf.push_str(column);
                buf.push_str(if *negated { " NOT IN (" } else { " IN (" });
                query.append_to(buf);
                buf.push(')');
            }
            Self::Exists { query, negated } => {
                buf.push_str(if *negated { "NOT EXISTS (" } else { "EXISTS (" });
                query.append_to(buf);
                buf.push(')');
            }
            Self::And(l, r) => match (l.is_empty(), r.is_empty()) {
                (true, true) => {}
                (true, false) => r.append_to(buf),
                (false, true) => l.append_to(buf),
                (false, false) => {
                    l.append_to(buf);
                    buf.push_str(" AND ");
                    r.append_to(buf);
                }
            },
            Self::Or(l, r) => match (l.is_empty(), r.is_empty()) {
                (true, true) => {}
                (true, false) => r.append_to(buf),
                (false, true) => l.append_to(buf),
                (false, false) => {
                    buf.push('(');
                    l.append_to(buf);
                    buf.push_str(" OR ");
                    r.append_to(buf);
                    buf.push(')');
                }
            },
        }
    }

    pub fn to_sql(&self) -> String {
        let mut s = String::new();
        self.append_to(&mut s);
        s
    }
}

/// 条件工厂。
pub trait ConditionFactory {
    /// 由列、值与运算符创建条件；无法生成有效谓词时返回 [`Condition::Empty`]。
    fn create(&self, column: &str, value: ConditionValue, operator: Operator) -> Condition;
}

/// 基于 builder 上下文的条件工厂：列名按方言转义，值登记为参数。
#[derive(Debug, Clone, Copy)]
pub struct SqlConditionFactory<'a> {
    ctx: &'a SqlContext,
}

impl<'a> SqlConditionFactory<'a> {
    pub fn new(ctx: &'a SqlContext) -> Self {
        Self { ctx }
    }

    /// 对已渲染的列（或表达式）创建条件。
    pub(crate) fn create_for_rendered(
        &self,
        column: String,
        value: ConditionValue,
        operator: Operator,
    ) -> Condition {
        if column.is_empty() {
            return Condition::Empty;
        }
        match value {
            ConditionValue::Query(_)
                if matches!(operator, Operator::Contains | Operator::Starts | Operator::Ends) =>
            {
                Condition::Empty
            }
            ConditionValue::Query(query) => {
                let query = self.ctx.embed(query);
                match operator {
                    Operator::In => Condition::InQuery {
                        column,
                        query,
                        negated: false,
                    },
                    Operator::NotIn => Condition::InQuery {
                        column,
                        query,
                        negated: true,
                    },
                    op => Condition::CompareQuery {
                        column,
                        operator: op.comparison(),
                        query,
                    },
                }
            }
            ConditionValue::List(values) => match operator {
                Operator::In | Operator::Equal => self.in_condition(column, values, false),
                Operator::NotIn | Operator::NotEqual => self.in_condition(column, values, true),
                op => match values.into_iter().next() {
                    Some(v) => self.create_for_rendered(column, ConditionValue::Value(v), op),
                    None => Condition::Empty,
                },
            },
            ConditionValue::Value(value) => self.value_condition(column, value, operator),
        }
    }

    fn value_condition(&self, column: String, value: SqlValue, operator: Operator) -> Condition {
        if value.is_null() {
            return match operator {
                Operator::Equal => Condition::IsNull(column),
                Operator::NotEqual => Condition::IsNotNull(column),
                _ => Condition::Empty,
            };
        }
        match operator {
            Operator::In => self.in_condition(column, vec![value], false),
            Operator::NotIn => self.in_condition(column, vec![value], true),
            Operator::Contains | Operator::Starts | Operator::Ends => {
                let text = value.as_text().unwrap_or_default();
                if text.is_empty() {
                    return Condition::Empty;
                }
                let pattern = operator.like_pattern(&text).unwrap_or(text);
                let param = self.ctx.add_param(pattern);
                Condition::Compare {
                    column,
                    operator: operator.comparison(),
                    param,
                }
            }
            op => {
                let param = self.ctx.add_param(value);
                Condition::Compare {
                    column,
                    operator: op.comparison(),
                    param,
                }
            }
        }
    }

    fn in_condition(&self, column: String, values: Vec<SqlValue>, negated: bool) -> Condition {
        let params: Vec<String> = values
            .into_iter()
            .filter(|v| !v.is_null())
            .map(|v| self.ctx.add_param(v))
            .collect();
        if params.is_empty() {
            return Condition::Empty;
        }
        Condition::In {
            column,
            params,
            negated,
        }
    }

    /// 范围条件：按 [`Boundary`](crate::segment::Boundary) 选择比较运算符。
    pub fn between<T: SegmentBound>(&self, column: &str, segment: &Segment<T>) -> Condition {
        let column = self.ctx.safe_column(column);
        if column.is_empty() || segment.is_empty() {
            return Condition::Empty;
        }
        let boundary = segment.boundary();
        let min = match segment.min() {
            Some(min) => Condition::Compare {
                column: column.clone(),
                operator: boundary.min_operator(),
                param: self.ctx.add_param(min.clone()),
            },
            None => Condition::Empty,
        };
        let max = match segment.effective_max() {
            Some(max) => Condition::Compare {
                column,
                operator: boundary.max_operator(),
                param: self.ctx.add_param(max),
            },
            None => Condition::Empty,
        };
        min.and(max)
    }

    pub fn exists(&self, query: impl Builder + 'static) -> Condition {
        Condition::Exists {
            query: self.ctx.embed(Box::new(query)),
            negated: false,
        }
    }

    pub fn not_exists(&self, query: impl Builder + 'static) -> Condition {
        Condition::Exists {
            query: self.ctx.embed(Box::new(query)),
            negated: true,
        }
    }

    pub fn is_null(&self, column: &str) -> Condition {
        let column = self.ctx.safe_column(column);
        if column.is_empty() {
            return Condition::Empty;
        }
        Condition::IsNull(column)
    }

    pub fn is_not_null(&self, column: &str) -> Condition {
        let column = self.ctx.safe_column(column);
        if column.is_empty() {
            return Condition::Empty;
        }
        Condition::IsNotNull(column)
    }

    /// 原样 SQL 条件，`[x]` 会被替换为方言引号。
    pub fn sql(&self, sql: &str) -> Condition {
        Condition::sql(self.ctx.dialect().replace_sql(sql))
    }
}

impl ConditionFactory for SqlConditionFactory<'_> {
    fn create(&self, column: &str, value: ConditionValue, operator: Operator) -> Condition {
        let column = self.ctx.safe_column(column);
        self.create_for_rendered(column, value, operator)
    }
}
