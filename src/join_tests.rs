#[cfg(test)]
mod tests {
    use crate::{JoinKind, Operator, SqlBuilder, SqlBuilderError};
    use pretty_assertions::assert_eq;

    #[test]
    fn left_join_on_columns() {
        let mut b = SqlBuilder::sql_server();
        b.select("u.Name, o.Total")
            .from("Users u")
            .left_join("Orders o")
            .on("u.Id", "o.UserId");
        assert_eq!(
            b.sql(),
            "SELECT [u].[Name], [o].[Total]\nFROM [Users] AS [u]\nLEFT JOIN [Orders] AS [o] ON [u].[Id] = [o].[UserId]"
        );
    }

    #[test]
    fn multiple_joins_and_extra_on() {
        let mut b = SqlBuilder::sql_server();
        b.from("Users u")
            .join("Roles r")
            .on("u.RoleId", "r.Id")
            .append_on("[r].[Enabled] = 1")
            .right_join("Depts d")
            .on_with("d.Id", "u.DeptId", Operator::GreaterEqual)
            .full_join("Teams t");
        assert_eq!(
            b.sql(),
            "SELECT *\nFROM [Users] AS [u]\nJOIN [Roles] AS [r] ON [u].[RoleId] = [r].[Id] AND [r].[Enabled] = 1\nRIGHT JOIN [Depts] AS [d] ON [d].[Id] >= [u].[DeptId]\nFULL JOIN [Teams] AS [t]"
        );
    }

    #[test]
    fn on_without_join_is_ignored() {
        let mut b = SqlBuilder::sql_server();
        b.from("Users").on("a", "b");
        assert_eq!(b.sql(), "SELECT *\nFROM [Users]");
    }

    #[test]
    fn raw_join() {
        let mut b = SqlBuilder::mysql();
        b.from("Users u")
            .append_join(JoinKind::Left, "[Roles] [r] ON [r].[Id] = [u].[RoleId]");
        assert_eq!(
            b.sql(),
            "SELECT *\nFROM `Users` AS `u`\nLEFT JOIN `Roles` `r` ON `r`.`Id` = `u`.`RoleId`"
        );
    }

    #[test]
    fn join_sub_query() {
        let mut b = SqlBuilder::sql_server();
        let mut sub = b.new_builder();
        sub.select("UserId").from("Orders");
        b.from("Users u")
            .join_query(JoinKind::Inner, sub, "o")
            .on("o.UserId", "u.Id");
        assert_eq!(
            b.sql(),
            "SELECT *\nFROM [Users] AS [u]\nJOIN (SELECT [UserId]\nFROM [Orders]) AS [o] ON [o].[UserId] = [u].[Id]"
        );
    }

    #[test]
    fn invalid_join_table_is_skipped_and_reported() {
        let mut b = SqlBuilder::sql_server();
        b.from("Users").join("a b c").on("x", "y");
        assert_eq!(b.sql(), "SELECT *\nFROM [Users]");
        assert_eq!(
            b.validate(),
            Err(SqlBuilderError::InvalidJoinTable("a b c".to_string()))
        );
    }
}
