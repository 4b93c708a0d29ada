#[cfg(test)]
mod tests {
    use crate::{Operator, SqlBuilder, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn group_by_with_having() {
        let mut b = SqlBuilder::sql_server();
        b.select("DeptId, COUNT(*) as n")
            .from("Emp")
            .group_by("DeptId")
            .having("COUNT(*)", 5, Operator::Greater);
        assert_eq!(
            b.sql(),
            "SELECT [DeptId], COUNT(*) AS [n]\nFROM [Emp]\nGROUP BY [DeptId] HAVING COUNT(*) > @_p_0"
        );
        assert_eq!(b.params()[0].value, SqlValue::I64(5));
    }

    #[test]
    fn multiple_group_columns_and_raw_having() {
        let mut b = SqlBuilder::mysql();
        b.select("a, b")
            .from("t")
            .group_by("a, t.b")
            .append_having("SUM([c]) > 10")
            .having("MAX([d])", 3, Operator::Less);
        assert_eq!(
            b.sql(),
            "SELECT `a`, `b`\nFROM `t`\nGROUP BY `a`, `t`.`b` HAVING SUM(`c`) > 10 AND MAX(`d`) < @_p_0"
        );
    }

    #[test]
    fn having_without_group_by_is_not_rendered() {
        let mut b = SqlBuilder::sql_server();
        b.from("t").having("COUNT(*)", 1, Operator::Equal);
        assert_eq!(b.sql(), "SELECT *\nFROM [t]");
    }
}
