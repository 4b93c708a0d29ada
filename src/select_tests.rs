#[cfg(test)]
mod tests {
    use crate::{Operator, SqlBuilder, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn select_columns_and_alias() {
        let mut b = SqlBuilder::sql_server();
        b.select("a, b as c").from("Users u");
        assert_eq!(b.sql(), "SELECT [a], [b] AS [c]\nFROM [Users] AS [u]");
    }

    #[test]
    fn select_star_when_only_from() {
        let mut b = SqlBuilder::sql_server();
        b.from("dbo.Users");
        assert_eq!(b.sql(), "SELECT *\nFROM [dbo].[Users]");
    }

    #[test]
    fn select_is_accumulated() {
        let mut b = SqlBuilder::pgsql();
        b.select("a").select(["b", "t.c"]).append_select("COUNT(*) AS [n]").from("t");
        assert_eq!(
            b.sql(),
            "SELECT \"a\", \"b\", \"t\".\"c\", COUNT(*) AS \"n\"\nFROM \"t\""
        );
    }

    #[test]
    fn distinct() {
        let mut b = SqlBuilder::mysql();
        b.distinct().select("a").from("t");
        assert_eq!(b.sql(), "SELECT DISTINCT `a`\nFROM `t`");
    }

    #[test]
    fn oracle_table_alias_has_no_as() {
        let mut b = SqlBuilder::oracle();
        b.select("u.Name").from("Users u");
        assert_eq!(b.sql(), "SELECT \"u\".\"Name\"\nFROM \"Users\" \"u\"");
    }

    #[test]
    fn select_sub_query_column() {
        let mut b = SqlBuilder::sql_server();
        let mut sub = b.new_builder();
        sub.select("COUNT(*)")
            .from("Orders o")
            .append_where("[o].[UserId] = [u].[Id]");
        b.select("u.Name").select_query(sub, "OrderCount").from("Users u");
        assert_eq!(
            b.sql(),
            "SELECT [u].[Name], (SELECT COUNT(*)\nFROM [Orders] AS [o]\nWHERE [o].[UserId] = [u].[Id]) AS [OrderCount]\nFROM [Users] AS [u]"
        );
    }

    #[test]
    fn from_sub_query() {
        let mut b = SqlBuilder::sql_server();
        let mut sub = b.new_builder();
        sub.select("Id").from("Users");
        b.from_query(sub, "t");
        assert_eq!(b.sql(), "SELECT *\nFROM (SELECT [Id]\nFROM [Users]) AS [t]");
    }

    #[test]
    fn order_by_directions() {
        let mut b = SqlBuilder::sql_server();
        b.select("a")
            .from("t")
            .order_by("Name desc, t.Id ASC")
            .order_by_desc("Created")
            .append_order_by("NEWID()");
        assert_eq!(
            b.sql(),
            "SELECT [a]\nFROM [t]\nORDER BY [Name] DESC, [t].[Id], [Created] DESC, NEWID()"
        );
    }

    #[test]
    fn raw_from() {
        let mut b = SqlBuilder::mysql();
        b.select("a").append_from("[t] WITH (NOLOCK)");
        assert_eq!(b.sql(), "SELECT `a`\nFROM `t` WITH (NOLOCK)");
    }

    #[test]
    fn independent_from_sub_query_keeps_parent_numbering() {
        let mut sub = SqlBuilder::pgsql();
        sub.select("Id").from("Users").where_("Age", 18, Operator::Greater);
        let mut b = SqlBuilder::pgsql();
        b.from_query(sub, "t").where_("Id", 5, Operator::Less);
        assert_eq!(
            b.sql(),
            "SELECT *\nFROM (SELECT \"Id\"\nFROM \"Users\"\nWHERE \"Age\" > @_p_0) AS \"t\"\nWHERE \"Id\" < @_p_1"
        );
        let values: Vec<SqlValue> = b.params().into_iter().map(|p| p.value).collect();
        assert_eq!(values, vec![SqlValue::I64(18), SqlValue::I64(5)]);
    }
}

