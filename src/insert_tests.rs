#[cfg(test)]
mod tests {
    use crate::{SqlBuilder, SqlBuilderError, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_values() {
        let mut b = SqlBuilder::sql_server();
        b.insert("dbo.Users", "Name, Age")
            .values(vec![SqlValue::from("Tom"), SqlValue::from(18)])
            .values(vec![SqlValue::from("Ann"), SqlValue::from(20)]);
        assert_eq!(
            b.sql(),
            "INSERT INTO [dbo].[Users] ([Name], [Age])\nVALUES (@_p_0, @_p_1), (@_p_2, @_p_3)"
        );
        assert_eq!(b.params().len(), 4);
    }

    #[test]
    fn insert_alias_is_not_rendered() {
        let mut b = SqlBuilder::pgsql();
        b.insert("Users u", "Name").values(["x"]);
        assert_eq!(b.sql(), "INSERT INTO \"Users\" (\"Name\")\nVALUES (@_p_0)");
    }

    #[test]
    fn insert_select() {
        let mut b = SqlBuilder::sql_server();
        b.insert("Archive", "Id, Name")
            .select("Id, Name")
            .from("Users")
            .where_("Deleted", true, crate::Operator::Equal);
        assert_eq!(
            b.sql(),
            "INSERT INTO [Archive] ([Id], [Name])\nSELECT [Id], [Name]\nFROM [Users]\nWHERE [Deleted] = @_p_0"
        );
    }

    #[test]
    fn invalid_insert_table() {
        let mut b = SqlBuilder::sql_server();
        b.insert("a b c", "Name").values(["x"]);
        assert_eq!(b.sql(), "");
        assert_eq!(
            b.validate(),
            Err(SqlBuilderError::InvalidInsertTable("a b c".to_string()))
        );
    }
}
