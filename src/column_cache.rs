//! ColumnCache：缓存列清单的安全名称渲染结果。

use crate::dialect::Dialect;
use crate::name_item::{ColumnItem, split_columns};
use std::collections::HashMap;
use std::rc::Rc;

/// 单个 builder 独占的列名缓存，键为原始列清单。
#[derive(Debug, Default, Clone)]
pub struct ColumnCache {
    columns: HashMap<String, Vec<String>>,
}

impl ColumnCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把 `a, b.c as d, COUNT(*) as n` 渲染为安全列名列表。
    pub fn safe_columns(&mut self, columns: &str, dialect: &Rc<dyn Dialect>) -> Vec<String> {
        if let Some(cached) = self.columns.get(columns) {
            return cached.clone();
        }
        let rendered: Vec<String> = split_columns(columns)
            .iter()
            .map(|c| ColumnItem::new(c, dialect.clone()))
            .filter(ColumnItem::validate)
            .map(|c| c.to_sql())
            .collect();
        self.columns.insert(columns.to_string(), rendered.clone());
        rendered
    }

    /// 渲染单个列名；解析失败时返回空串。
    pub fn safe_column(&mut self, column: &str, dialect: &Rc<dyn Dialect>) -> String {
        self.safe_columns(column, dialect)
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }
}
