//! ParameterManager：登记命名参数，避免把值直接拼进 SQL。

use crate::dialect::Dialect;
use crate::value::SqlValue;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// builder 与其子查询共享的参数管理器。
pub type ParameterManagerRef = Rc<RefCell<ParameterManager>>;

/// 参数方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterDirection {
    #[default]
    Input,
    Output,
    InputOutput,
    ReturnValue,
}

/// 一个已登记的参数。
#[derive(Debug, Clone, PartialEq)]
pub struct SqlParam {
    pub name: String,
    pub value: SqlValue,
    pub direction: ParameterDirection,
}

/// 参数管理器：名称形如 `@_p_0`，按登记顺序保存。
#[derive(Debug, Clone)]
pub struct ParameterManager {
    prefix: String,
    index: usize,
    params: IndexMap<String, SqlParam>,
}

impl ParameterManager {
    pub fn new(dialect: &dyn Dialect) -> Self {
        Self::with_prefix(dialect.prefix())
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            index: 0,
            params: IndexMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 生成下一个参数名。
    pub fn generate_name(&mut self) -> String {
        let name = format!("{}_p_{}", self.prefix, self.index);
        self.index += 1;
        name
    }

    /// 补全参数前缀。
    pub fn normalize_name(&self, name: &str) -> String {
        let name = name.trim();
        if name.starts_with(self.prefix.as_str()) {
            return name.to_string();
        }
        format!("{}{}", self.prefix, name)
    }

    /// 登记参数，返回规范化后的名称；同名参数会被覆盖，空名称自动生成。
    pub fn add(&mut self, name: &str, value: impl Into<SqlValue>) -> String {
        self.add_with_direction(name, value, ParameterDirection::Input)
    }

    pub fn add_with_direction(
        &mut self,
        name: &str,
        value: impl Into<SqlValue>,
        direction: ParameterDirection,
    ) -> String {
        let name = if name.trim().is_empty() {
            self.generate_name()
        } else {
            self.normalize_name(name)
        };
        let param = SqlParam {
            name: name.clone(),
            value: value.into(),
            direction,
        };
        if self.params.insert(name.clone(), param).is_some() {
            tracing::debug!(name = %name, "sql parameter overwritten");
        }
        name
    }

    /// 以自动生成的名称登记值。
    pub fn add_value(&mut self, value: impl Into<SqlValue>) -> String {
        let name = self.generate_name();
        self.add(&name, value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(&self.normalize_name(name))
    }

    pub fn value(&self, name: &str) -> Option<&SqlValue> {
        self.param(name).map(|p| &p.value)
    }

    pub fn param(&self, name: &str) -> Option<&SqlParam> {
        self.params.get(&self.normalize_name(name))
    }

    /// 按登记顺序返回全部参数。
    pub fn params(&self) -> impl Iterator<Item = &SqlParam> {
        self.params.values()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// 清空参数并重置名称计数。
    pub fn clear(&mut self) {
        self.params.clear();
        self.index = 0;
    }
}
