//! SqlContext：一个 builder 及其子句共用的方言、参数管理器与列名缓存。

use crate::builder::Builder;
use crate::clause::RenderedQuery;
use crate::column_cache::ColumnCache;
use crate::dialect::Dialect;
use crate::interpolate::replace_params;
use crate::parameter_manager::{ParameterManager, ParameterManagerRef};
use crate::value::SqlValue;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct SqlContext {
    dialect: Rc<dyn Dialect>,
    params: ParameterManagerRef,
    columns: Rc<RefCell<ColumnCache>>,
}

impl SqlContext {
    pub fn new(dialect: Rc<dyn Dialect>) -> Self {
        let params = ParameterManager::new(dialect.as_ref());
        Self {
            dialect,
            params: Rc::new(RefCell::new(params)),
            columns: Rc::new(RefCell::new(ColumnCache::new())),
        }
    }

    /// 深拷贝参数与列缓存，只共享不可变的方言。
    pub fn fork(&self) -> Self {
        Self {
            dialect: self.dialect.clone(),
            params: Rc::new(RefCell::new(self.params.borrow().clone())),
            columns: Rc::new(RefCell::new(self.columns.borrow().clone())),
        }
    }

    pub fn dialect(&self) -> &Rc<dyn Dialect> {
        &self.dialect
    }

    pub fn params(&self) -> &ParameterManagerRef {
        &self.params
    }

    /// 登记一个值并返回参数名。
    pub fn add_param(&self, value: impl Into<SqlValue>) -> String {
        self.params.borrow_mut().add_value(value)
    }

    pub fn safe_column(&self, column: &str) -> String {
        self.columns
            .borrow_mut()
            .safe_column(column, &self.dialect)
    }

    pub fn safe_columns(&self, columns: &str) -> Vec<String> {
        self.columns
            .borrow_mut()
            .safe_columns(columns, &self.dialect)
    }

    pub fn replace_sql(&self, sql: &str) -> String {
        self.dialect.replace_sql(sql)
    }

    /// 接收一条子语句。
    ///
    /// 子语句与当前上下文共用参数管理器时原样保留；否则把它引用到的参数重新登记到
    /// 当前管理器，并以改名后的 SQL 固定下来，避免 `@_p_0` 之类的名字冲突。
    pub fn embed(&self, query: Box<dyn Builder>) -> Box<dyn Builder> {
        let rendered = match query.parameter_source() {
            Some(source) if !Rc::ptr_eq(source, &self.params) => {
                Some(self.adopt_params(&query.to_sql(), &source.borrow()))
            }
            _ => None,
        };
        match rendered {
            Some(sql) => Box::new(RenderedQuery::new(sql)),
            None => query,
        }
    }

    fn adopt_params(&self, sql: &str, source: &ParameterManager) -> String {
        let mut renames: HashMap<String, String> = HashMap::new();
        let mut target = self.params.borrow_mut();
        let sql = replace_params(sql, source.prefix(), self.dialect.as_ref(), |name, out| {
            let Some(param) = source.param(name) else {
                return false;
            };
            let renamed = renames.entry(param.name.clone()).or_insert_with(|| {
                target.add_with_direction("", param.value.clone(), param.direction)
            });
            out.push_str(renamed);
            true
        });
        if !renames.is_empty() {
            tracing::debug!(count = renames.len(), "sub-query parameters re-registered");
        }
        sql
    }

    pub(crate) fn clear_columns(&self) {
        self.columns.borrow_mut().clear();
    }
}
