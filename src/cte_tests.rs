#[cfg(test)]
mod tests {
    use crate::{Operator, SqlBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn with_common_table_expression() {
        let mut b = SqlBuilder::sql_server();
        let mut adults = b.new_builder();
        adults
            .select("Id")
            .from("Users")
            .where_("Age", 18, Operator::Greater);
        b.cte("Adults", adults).select("*").from("Adults");
        assert_eq!(
            b.sql(),
            "WITH [Adults] AS (SELECT [Id]\nFROM [Users]\nWHERE [Age] > @_p_0)\nSELECT *\nFROM [Adults]"
        );
    }

    #[test]
    fn multiple_ctes_after_start_sql() {
        let mut b = SqlBuilder::pgsql();
        let mut a = b.new_builder();
        a.select("x").from("t1");
        let mut c = b.new_builder();
        c.select("y").from("t2");
        b.append_start("SET search_path = [app];")
            .cte("a", a)
            .cte("c", c)
            .select("a.x, c.y")
            .from("a")
            .join("c")
            .append_on("1 = 1");
        assert_eq!(
            b.sql(),
            "SET search_path = \"app\";\nWITH \"a\" AS (SELECT \"x\"\nFROM \"t1\"), \"c\" AS (SELECT \"y\"\nFROM \"t2\")\nSELECT \"a\".\"x\", \"c\".\"y\"\nFROM \"a\"\nJOIN \"c\" ON 1 = 1"
        );
    }
}
