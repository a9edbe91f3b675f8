#[cfg(test)]
mod tests {
    use crate::{
        And, Arg, Eq, Error, JoinKind, Or, Part, PlaceholderFormat, Statement, ValidationError,
        alias, args, eq, expr, placeholders, raw, select, set_default_placeholder_format_scoped,
    };
    use pretty_assertions::assert_eq;

    fn ints(values: &[i64]) -> Vec<Arg> {
        values.iter().copied().map(Arg::from).collect()
    }

    #[test]
    fn select_full_statement() {
        let _g = set_default_placeholder_format_scoped(PlaceholderFormat::Question);
        let sb = select(["a", "b"])
            .prefix(expr("WITH prefix AS ?", [0_i64]))
            .distinct()
            .columns("c")
            .column(expr(
                format!("IF(d IN ({}), 1, 0) as stat_column", placeholders(3)),
                [1_i64, 2, 3],
            ))
            .column(expr("a > ?", [100_i64]))
            .column(alias(eq! { "b" => vec![101_i64, 102, 103] }, "b_alias"))
            .from("e")
            .join_clause(JoinKind::Cross, "j1")
            .join("j2")
            .left_join("j3")
            .right_join("j4")
            .inner_join("j5")
            .cross_join("j6")
            .where_(expr("f = ?", [4_i64]))
            .where_(eq! { "g" => 5_i64 })
            .where_(eq! { "h" => 6_i64 })
            .where_(eq! { "i" => vec![7_i64, 8, 9] })
            .where_(Or::new([
                Part::from(expr("j = ?", [10_i64])),
                And::new([Part::from(eq! { "k" => 11_i64 }), raw("true").into()]).into(),
            ]))
            .group_by("l")
            .having("m = n")
            .order_by_clause(expr("? DESC", [1_i64]))
            .order_by(["o ASC", "p DESC"])
            .limit(12)
            .offset(13)
            .suffix(expr("FETCH FIRST ? ROWS ONLY", [14_i64]));

        let (sql, args) = sb.build().unwrap();
        assert_eq!(
            sql,
            "WITH prefix AS ? \
             SELECT DISTINCT a, b, c, IF(d IN (?, ?, ?), 1, 0) as stat_column, a > ?, \
             (b IN (?, ?, ?)) AS b_alias \
             FROM e \
             CROSS JOIN j1 JOIN j2 LEFT JOIN j3 RIGHT JOIN j4 INNER JOIN j5 CROSS JOIN j6 \
             WHERE f = ? AND g = ? AND h = ? AND i IN (?, ?, ?) AND (j = ? OR (k = ? AND true)) \
             GROUP BY l HAVING m = n ORDER BY ? DESC, o ASC, p DESC LIMIT 12 OFFSET 13 \
             FETCH FIRST ? ROWS ONLY"
        );
        assert_eq!(
            args,
            ints(&[0, 1, 2, 3, 100, 101, 102, 103, 4, 5, 6, 7, 8, 9, 10, 11, 1, 14])
        );
    }

    #[test]
    fn select_from_select() {
        let sub = select(["c", "d"])
            .from("e")
            .where_(eq! { "f" => 1_i64 });
        let sb = select(["a", "b"]).from_select(sub, "subq");
        let (sql, args) = sb.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(
            sql,
            "SELECT a, b FROM (SELECT c, d FROM e WHERE f = ?) AS subq"
        );
        assert_eq!(args, ints(&[1]));
    }

    #[test]
    fn nested_select_inherits_outer_format() {
        let sub = select("z")
            .from("bar")
            .where_(expr("w = ?", [2_i64]))
            .placeholder_format(PlaceholderFormat::Question);
        let sb = select("*")
            .from("foo")
            .where_(expr("x = ?", [1_i64]))
            .where_(expr("y IN (?)", args![sub]))
            .where_(expr("v = ?", [3_i64]))
            .placeholder_format(PlaceholderFormat::Dollar);
        let (sql, args) = sb.build().unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM foo WHERE x = $1 AND y IN (SELECT z FROM bar WHERE w = $2) AND v = $3"
        );
        assert_eq!(args, ints(&[1, 2, 3]));
    }

    #[test]
    fn select_eq_subquery_is_parenthesized() {
        let sb = select("*").from("t").where_(
            eq! { "owner" => select("id").from("users").where_(expr("name = ?", ["bob"])) },
        );
        let (sql, args) = sb.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM t WHERE owner = (SELECT id FROM users WHERE name = ?)"
        );
        assert_eq!(args, vec![Arg::from("bob")]);
    }

    #[test]
    fn empty_clauses_leave_no_keyword() {
        let (sql, args) = select("a")
            .from("t")
            .where_(Eq::new())
            .build_with_format(PlaceholderFormat::Question)
            .unwrap();
        assert_eq!(sql, "SELECT a FROM t");
        assert!(args.is_empty());
        for kw in ["WHERE", "GROUP BY", "HAVING", "ORDER BY", "LIMIT", "OFFSET"] {
            assert!(!sql.contains(kw), "{kw} should be absent");
        }
    }

    #[test]
    fn empty_in_list_is_false_predicate() {
        let (sql, args) = select("a")
            .from("t")
            .where_(eq! { "id" => Vec::<i64>::new() })
            .build_with_format(PlaceholderFormat::Question)
            .unwrap();
        assert_eq!(sql, "SELECT a FROM t WHERE (1=0)");
        assert!(args.is_empty());
    }

    #[test]
    fn select_without_columns_fails() {
        let err = select(Vec::<String>::new())
            .from("t")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingColumns)
        ));

        let err = select("a").remove_columns().from("t").build().unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::MissingColumns));
    }

    #[test]
    fn select_without_from_is_allowed() {
        let (sql, _) = select("1")
            .build_with_format(PlaceholderFormat::Question)
            .unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn select_options_and_multiple_from() {
        let (sql, _) = select("a")
            .options(["SQL_NO_CACHE"])
            .from(["t1", "t2"])
            .from("t3")
            .build_with_format(PlaceholderFormat::Question)
            .unwrap();
        assert_eq!(sql, "SELECT SQL_NO_CACHE a FROM t1, t2, t3");
    }

    #[test]
    fn join_with_bound_args() {
        let sb = select("*")
            .from("a")
            .left_join(expr("b ON b.a_id = a.id AND b.kind = ?", [3_i64]))
            .where_(expr("a.id = ?", [4_i64]));
        let (sql, args) = sb.build_with_format(PlaceholderFormat::Colon).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM a LEFT JOIN b ON b.a_id = a.id AND b.kind = :1 WHERE a.id = :2"
        );
        assert_eq!(args, ints(&[3, 4]));
    }

    #[test]
    fn having_and_group_by_args() {
        let sb = select(["dept", "COUNT(*)"])
            .from("emp")
            .group_by("dept")
            .having(expr("COUNT(*) > ?", [5_i64]))
            .having("MAX(age) < 60");
        let (sql, args) = sb.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(
            sql,
            "SELECT dept, COUNT(*) FROM emp GROUP BY dept HAVING COUNT(*) > ? AND MAX(age) < 60"
        );
        assert_eq!(args, ints(&[5]));
    }

    #[test]
    fn remove_limit_and_offset() {
        let sb = select("a").from("t").limit(10).offset(20);
        let (sql, _) = sb
            .remove_limit()
            .remove_offset()
            .build_with_format(PlaceholderFormat::Question)
            .unwrap();
        assert_eq!(sql, "SELECT a FROM t");

        let (sql, args) = sb.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(sql, "SELECT a FROM t LIMIT 10 OFFSET 20");
        assert!(args.is_empty());
    }

    #[test]
    fn select_is_copy_on_write() {
        let base = select("a").from("t");
        let filtered = base.where_(expr("b = ?", [1_i64]));
        let ordered = base.order_by("a DESC");

        let render = |sb: &crate::SelectBuilder| {
            sb.build_with_format(PlaceholderFormat::Question).unwrap().0
        };
        assert_eq!(render(&base), "SELECT a FROM t");
        assert_eq!(render(&filtered), "SELECT a FROM t WHERE b = ?");
        assert_eq!(render(&ordered), "SELECT a FROM t ORDER BY a DESC");
    }

    #[test]
    fn switching_format_only_changes_placeholders() {
        let sb = select("a")
            .from("t")
            .where_(expr("b = ? AND c = ?", args!["x", 2_i64]));
        let (q_sql, q_args) = sb.build_with_format(PlaceholderFormat::Question).unwrap();
        let (d_sql, d_args) = sb.build_with_format(PlaceholderFormat::Dollar).unwrap();
        assert_eq!(q_sql, "SELECT a FROM t WHERE b = ? AND c = ?");
        assert_eq!(d_sql, "SELECT a FROM t WHERE b = $1 AND c = $2");
        assert_eq!(q_args, d_args);
    }

    #[test]
    fn render_is_idempotent() {
        let sb = select("a")
            .from("t")
            .where_(eq! { "b" => vec![1_i64, 2], "c" => () });
        let first = sb.build_with_format(PlaceholderFormat::Dollar).unwrap();
        let second = sb.build_with_format(PlaceholderFormat::Dollar).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.0, "SELECT a FROM t WHERE b IN ($1, $2) AND c IS NULL");
    }
}
