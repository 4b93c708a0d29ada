//! EndClause：分页与语句末尾的原样 SQL。

use crate::clause::Clause;
use crate::context::SqlContext;

#[derive(Debug, Clone)]
pub struct EndClause {
    ctx: SqlContext,
    offset: Option<String>,
    limit: Option<String>,
    sqls: Vec<String>,
}

impl EndClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            offset: None,
            limit: None,
            sqls: Vec::new(),
        }
    }

    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            ..self.clone()
        }
    }

    /// 跳过的行数；仅在设置了 `take` 时输出。
    pub fn skip(&mut self, count: usize) -> &mut Self {
        self.offset = Some(self.set_param(self.offset.clone(), count));
        self
    }

    /// 取出的行数。
    pub fn take(&mut self, count: usize) -> &mut Self {
        if self.offset.is_none() {
            self.skip(0);
        }
        self.limit = Some(self.set_param(self.limit.clone(), count));
        self
    }

    /// 页码从 1 开始，小于 1 按 1 处理；偏移量溢出时取 `usize::MAX`。
    pub fn page(&mut self, page: usize, page_size: usize) -> &mut Self {
        let page = page.max(1);
        self.skip((page - 1).saturating_mul(page_size))
            .take(page_size)
    }

    // 重复设置时复用同一个参数名
    fn set_param(&self, name: Option<String>, count: usize) -> String {
        match name {
            Some(name) => self.ctx.params().borrow_mut().add(&name, count),
            None => self.ctx.add_param(count),
        }
    }

    pub fn has_paging(&self) -> bool {
        self.limit.is_some()
    }

    pub fn append(&mut self, sql: &str) -> &mut Self {
        let sql = self.ctx.replace_sql(sql);
        self.append_raw(&sql)
    }

    pub fn append_raw(&mut self, sql: &str) -> &mut Self {
        if !sql.trim().is_empty() {
            self.sqls.push(sql.to_string());
        }
        self
    }
}

impl Clause for EndClause {
    fn validate(&self) -> bool {
        self.has_paging() || !self.sqls.is_empty()
    }

    fn append_to(&self, buf: &mut String) {
        if let (Some(offset), Some(limit)) = (&self.offset, &self.limit) {
            self.ctx.dialect().append_paging(buf, offset, limit);
            if !self.sqls.is_empty() {
                buf.push('\n');
            }
        }
        buf.push_str(&self.sqls.join("\n"));
    }

    fn clear(&mut self) {
        self.offset = None;
        self.limit = None;
        self.sqls.clear();
    }
}
