#[cfg(test)]
mod tests {
    use crate::dialect::{OracleDialect, SqlServerDialect};
    use crate::parameter_manager::{ParameterDirection, ParameterManager};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_names_are_sequential() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        assert_eq!(pm.add_value(1), "@_p_0");
        assert_eq!(pm.add_value("a"), "@_p_1");
        assert_eq!(pm.len(), 2);

        let names: Vec<&str> = pm.params().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["@_p_0", "@_p_1"]);
    }

    #[test]
    fn oracle_uses_colon_prefix() {
        let mut pm = ParameterManager::new(&OracleDialect);
        assert_eq!(pm.prefix(), ":");
        assert_eq!(pm.add_value(1), ":_p_0");
    }

    #[test]
    fn explicit_names_are_normalized() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        assert_eq!(pm.add("id", 5), "@id");
        assert!(pm.contains("id"));
        assert!(pm.contains("@id"));
        assert_eq!(pm.value("id"), Some(&SqlValue::I64(5)));
    }

    #[test]
    fn same_name_overwrites() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add("id", 5);
        pm.add("@id", 6);
        assert_eq!(pm.len(), 1);
        assert_eq!(pm.value("@id"), Some(&SqlValue::I64(6)));
    }

    #[test]
    fn blank_name_is_generated() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        assert_eq!(pm.add("  ", "x"), "@_p_0");
    }

    #[test]
    fn direction_is_kept() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_with_direction("total", (), ParameterDirection::Output);
        let param = pm.param("total").expect("param");
        assert_eq!(param.direction, ParameterDirection::Output);
        assert!(param.value.is_null());
        assert_eq!(pm.param("@_p_0").map(|p| p.direction), None);
    }

    #[test]
    fn clear_resets_counter() {
        let mut pm = ParameterManager::new(&SqlServerDialect);
        pm.add_value(1);
        pm.add_value(2);
        pm.clear();
        assert!(pm.is_empty());
        assert_eq!(pm.add_value(3), "@_p_0");
    }
}
