//! 子句公共约定：每个子句负责渲染自己的片段，并告知是否有内容可输出。

use crate::builder::Builder;
use crate::context::SqlContext;
use crate::name_item::append_alias;

/// SQL 子句。
pub trait Clause {
    /// 子句是否有内容；返回 false 时整个子句被跳过。
    fn validate(&self) -> bool;

    fn append_to(&self, buf: &mut String);

    /// 重置子句状态，实例可继续复用。
    fn clear(&mut self);
}

/// 带别名的子查询：`(SELECT ...) AS [alias]`。
#[derive(Debug, Clone)]
pub struct SubQuery {
    query: Box<dyn Builder>,
    alias: String,
}

impl SubQuery {
    pub(crate) fn new(ctx: &SqlContext, query: Box<dyn Builder>, alias: &str) -> Self {
        Self {
            query: ctx.embed(query),
            alias: ctx.dialect().safe_name(alias),
        }
    }

    pub(crate) fn append_to(&self, buf: &mut String, alias_keyword: &str) {
        buf.push('(');
        self.query.append_to(buf);
        buf.push(')');
        if !self.alias.is_empty() {
            append_alias(buf, alias_keyword, &self.alias);
        }
    }
}

/// 已渲染完成的子语句，参数已登记在外层 builder 中。
#[derive(Debug, Clone)]
pub(crate) struct RenderedQuery {
    sql: String,
}

impl RenderedQuery {
    pub(crate) fn new(sql: String) -> Self {
        Self { sql }
    }
}

impl Builder for RenderedQuery {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(&self.sql);
    }
}
