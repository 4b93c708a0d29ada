#[cfg(test)]
mod tests {
    use crate::builder::Builder;
    use crate::{DatabaseType, JoinKind, Operator, SqlBuilder, SqlBuilderError, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_builder_renders_nothing() {
        let b = SqlBuilder::sql_server();
        assert_eq!(b.sql(), "");
        assert!(b.params().is_empty());
        assert_eq!(b.validate(), Ok(()));
    }

    #[test]
    fn clauses_render_in_fixed_order() {
        let mut b = SqlBuilder::sql_server();
        // 调用顺序与输出顺序无关
        b.append_end("OPTION (RECOMPILE)")
            .order_by("Total desc")
            .take(10)
            .group_by("u.Id, u.Name")
            .having("SUM([o].[Total])", 100, Operator::Greater)
            .where_("u.State", 1, Operator::Equal)
            .join("Orders o")
            .on("o.UserId", "u.Id")
            .from("Users u")
            .select("u.Id, u.Name, SUM([o].[Total]) as Total")
            .append_start("SET NOCOUNT ON;");
        assert_eq!(
            b.sql(),
            "SET NOCOUNT ON;\n\
             SELECT [u].[Id], [u].[Name], SUM([o].[Total]) AS [Total]\n\
             FROM [Users] AS [u]\n\
             JOIN [Orders] AS [o] ON [o].[UserId] = [u].[Id]\n\
             WHERE [u].[State] = @_p_3\n\
             GROUP BY [u].[Id], [u].[Name] HAVING SUM([o].[Total]) > @_p_2\n\
             ORDER BY [Total] DESC\n\
             OFFSET @_p_0 ROWS FETCH NEXT @_p_1 ROWS ONLY\n\
             OPTION (RECOMPILE)"
        );
    }

    #[test]
    fn clone_is_independent() {
        let mut b = SqlBuilder::sql_server();
        b.select("a").from("t").where_("x", 1, Operator::Equal);

        let mut c = b.clone();
        c.where_("y", 2, Operator::Equal).order_by("a");
        b.where_("z", 3, Operator::Equal);

        assert_eq!(
            b.sql(),
            "SELECT [a]\nFROM [t]\nWHERE [x] = @_p_0 AND [z] = @_p_1"
        );
        assert_eq!(
            c.sql(),
            "SELECT [a]\nFROM [t]\nWHERE [x] = @_p_0 AND [y] = @_p_1\nORDER BY [a]"
        );
        assert_eq!(b.params()[1].value, SqlValue::I64(3));
        assert_eq!(c.params()[1].value, SqlValue::I64(2));
    }

    #[test]
    fn clear_resets_everything() {
        let mut b = SqlBuilder::mysql();
        b.select("a")
            .from("t")
            .left_join("u")
            .where_("x", 1, Operator::Equal)
            .take(1);
        b.clear();
        assert_eq!(b.sql(), "");
        assert!(b.params().is_empty());

        b.from("t").where_("y", 2, Operator::Equal);
        assert_eq!(b.sql(), "SELECT *\nFROM `t`\nWHERE `y` = @_p_0");
    }

    #[test]
    fn new_builder_shares_parameters_and_dialect() {
        let b = SqlBuilder::oracle();
        let mut sub = b.new_builder();
        sub.from("t").where_("a", 1, Operator::Equal);
        assert_eq!(sub.database_type(), DatabaseType::Oracle);
        assert_eq!(b.params().len(), 1);
        assert_eq!(b.params()[0].name, ":_p_0");
        assert_eq!(b.sql(), "");
    }

    #[test]
    fn validate_reports_bad_from_table() {
        let mut b = SqlBuilder::sql_server();
        b.select("a").from("a b c");
        let err = b.validate().unwrap_err();
        assert_eq!(err, SqlBuilderError::InvalidFromTable("a b c".to_string()));
        assert_eq!(err.to_string(), "invalid table name in FROM clause: `a b c`");
        assert_eq!(b.sql(), "SELECT [a]");
    }

    #[test]
    fn explicit_named_parameters_for_raw_sql() {
        let mut b = SqlBuilder::sql_server();
        b.from("Users")
            .append_where("[Name] = @name")
            .add_param("name", "Tom");
        assert_eq!(b.sql(), "SELECT *\nFROM [Users]\nWHERE [Name] = @name");
        assert_eq!(b.parameter_manager().value("@name"), Some(&SqlValue::from("Tom")));
        assert_eq!(b.debug_sql(), "SELECT *\nFROM [Users]\nWHERE [Name] = N'Tom'");
    }

    #[test]
    fn builder_as_trait_object() {
        let mut b = SqlBuilder::pgsql();
        b.from("t");
        let boxed: Box<dyn Builder> = Box::new(b.clone());
        let copy = boxed.clone();
        assert_eq!(copy.to_sql(), b.to_string());
    }

    #[test]
    fn clause_accessors() {
        let mut b = SqlBuilder::sql_server();
        assert!(b.where_clause().condition().is_empty());
        b.where_clause_mut().is_null("a");
        b.join_clause_mut().join(JoinKind::Left, "u");
        b.from_clause_mut().from_with_alias("Users", "x");
        assert_eq!(
            b.sql(),
            "SELECT *\nFROM [Users] AS [x]\nLEFT JOIN [u]\nWHERE [a] IS NULL"
        );
        assert_eq!(b.from_clause().table().map(|t| t.raw()), Some("Users"));
    }
}
