//! StartClause：语句开头的原样 SQL 与 CTE（`WITH ... AS (...)`）。

use crate::builder::Builder;
use crate::clause::Clause;
use crate::context::SqlContext;

#[derive(Debug, Clone)]
pub struct StartClause {
    ctx: SqlContext,
    sqls: Vec<String>,
    ctes: Vec<(String, Box<dyn Builder>)>,
}

impl StartClause {
    pub fn new(ctx: SqlContext) -> Self {
        Self {
            ctx,
            sqls: Vec::new(),
            ctes: Vec::new(),
        }
    }

    /// 复制到另一个上下文（builder clone 时使用）。
    pub fn clone_into(&self, ctx: &SqlContext) -> Self {
        Self {
            ctx: ctx.clone(),
            ..self.clone()
        }
    }

    /// 追加开头 SQL，`[x]` 会替换为方言引号。
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

    /// 添加一个公用表表达式。
    pub fn cte(&mut self, name: &str, query: impl Builder + 'static) -> &mut Self {
        let name = self.ctx.dialect().safe_name(name);
        if !name.is_empty() {
            let query = self.ctx.embed(Box::new(query));
            self.ctes.push((name, query));
        }
        self
    }
}

impl Clause for StartClause {
    fn validate(&self) -> bool {
        !self.sqls.is_empty() || !self.ctes.is_empty()
    }

    fn append_to(&self, buf: &mut String) {
        buf.push_str(&self.sqls.join("\n"));
        if self.ctes.is_empty() {
            return;
        }
        if !self.sqls.is_empty() {
            buf.push('\n');
        }
        buf.push_str("WITH ");
        for (i, (name, query)) in self.ctes.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push_str(name);
            buf.push_str(" AS (");
            query.append_to(buf);
            buf.push(')');
        }
    }

    fn clear(&mut self) {
        self.sqls.clear();
        self.ctes.clear();
    }
}
