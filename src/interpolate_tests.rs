#[cfg(test)]
mod tests {
    use crate::database_type::DatabaseType;
    use crate::dialect::{OracleDialect, SqlServerDialect};
    use crate::interpolate::interpolate;
    use crate::parameter_manager::ParameterManager;
    use crate::{Operator, SqlBuilder};
    use pretty_assertions::assert_eq;
    use time::macros::{date, datetime};

    #[test]
    fn debug_sql_quotes_strings() {
        let mut b = SqlBuilder::sql_server();
        b.from("Users")
            .where_("Name", "O'Neil", Operator::Equal)
            .where_("Age", 30, Operator::Equal);
        assert_eq!(
            b.debug_sql(),
            "SELECT *\nFROM [Users]\nWHERE [Name] = N'O''Neil' AND [Age] = 30"
        );
    }

    #[test]
    fn mysql_escapes_backslash() {
        let mut pm = ParameterManager::with_prefix("@");
        pm.add_value("a\\b'c");
        assert_eq!(
            interpolate("x = @_p_0", &pm, DatabaseType::MySql),
            "x = 'a\\\\b''c'"
        );
    }

    #[test]
    fn booleans_per_database() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(true);
        assert_eq!(interpolate("@_p_0", &pm, DatabaseType::SqlServer), "1");
        assert_eq!(interpolate("@_p_0", &pm, DatabaseType::PgSql), "TRUE");
    }

    #[test]
    fn dates() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(date!(2024 - 01 - 02));
        pm.add_value(datetime!(2024 - 01 - 02 03:04:05));
        assert_eq!(
            interpolate("@_p_0, @_p_1", &pm, DatabaseType::PgSql),
            "'2024-01-02', '2024-01-02 03:04:05'"
        );

        let mut pm = ParameterManager::new(&OracleDialect);
        pm.add_value(date!(2024 - 01 - 02));
        assert_eq!(
            interpolate(":_p_0", &pm, DatabaseType::Oracle),
            "to_date('2024-01-02', 'YYYY-MM-DD')"
        );
    }

    #[test]
    fn null_and_bytes() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(());
        pm.add_value(vec![0x0A_u8, 0xFF]);
        assert_eq!(
            interpolate("@_p_0, @_p_1", &pm, DatabaseType::SqlServer),
            "NULL, 0x0AFF"
        );
        assert_eq!(
            interpolate("@_p_1", &pm, DatabaseType::Sqlite),
            "X'0AFF'"
        );
    }

    #[test]
    fn string_literals_and_unknown_names_are_kept() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(1);
        assert_eq!(
            interpolate("SELECT '@_p_0', @_p_0, @other", &pm, DatabaseType::SqlServer),
            "SELECT '@_p_0', 1, @other"
        );
    }

    #[test]
    fn longer_names_are_not_split() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        for i in 0..11 {
            pm.add_value(i);
        }
        assert_eq!(
            interpolate("@_p_1 + @_p_10", &pm, DatabaseType::SqlServer),
            "1 + 10"
        );
    }

    #[test]
    fn quote_inside_identifier_does_not_start_literal() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(1);
        assert_eq!(
            interpolate("[it's] = @_p_0", &pm, DatabaseType::SqlServer),
            "[it's] = 1"
        );
    }

    #[test]
    fn names_inside_identifier_are_kept() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(1);
        assert_eq!(
            interpolate("[@_p_0] = @_p_0", &pm, DatabaseType::SqlServer),
            "[@_p_0] = 1"
        );
    }
}
