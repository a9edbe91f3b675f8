#[cfg(test)]
mod tests {
    use crate::runner_tests::RecordingRunner;
    use crate::{
        Arg, Error, PlaceholderFormat, SqlValue, Statement, ValidationError, case, case_of, eq,
        expr, raw, select, set_default_placeholder_format_scoped, update,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn update_full_statement() {
        let _g = set_default_placeholder_format_scoped(PlaceholderFormat::Question);
        let ub = update("a")
            .prefix(expr("WITH prefix AS ?", [0_i64]))
            .set("b", expr("? + 1", [1_i64]))
            .set_map(eq! { "c" => 2_i64 })
            .set("c1", case_of("status").when("1", "2").when("2", "1"))
            .set(
                "c2",
                case()
                    .when("a = 2", expr("?", ["foo"]))
                    .when("a = 3", expr("?", ["bar"])),
            )
            .set("c3", select("a").from("b"))
            .where_(expr("d = ?", [3_i64]))
            .order_by("e")
            .limit(4)
            .offset(5)
            .suffix(expr("RETURNING ?", [6_i64]));

        let (sql, args) = ub.build().unwrap();
        assert_eq!(
            sql,
            "WITH prefix AS ? UPDATE a SET b = ? + 1, c = ?, \
             c1 = CASE status WHEN 1 THEN 2 WHEN 2 THEN 1 END, \
             c2 = CASE WHEN a = 2 THEN ? WHEN a = 3 THEN ? END, \
             c3 = (SELECT a FROM b) \
             WHERE d = ? ORDER BY e LIMIT 4 OFFSET 5 RETURNING ?"
        );
        assert_eq!(
            args,
            vec![
                Arg::from(0_i64),
                Arg::from(1_i64),
                Arg::from(2_i64),
                Arg::from("foo"),
                Arg::from("bar"),
                Arg::from(3_i64),
                Arg::from(6_i64),
            ]
        );
    }

    #[test]
    fn update_set_map_question_and_dollar() {
        let ub = update("test").set_map(eq! { "y" => 2_i64, "x" => 1_i64 });

        let (sql, args) = ub.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(sql, "UPDATE test SET x = ?, y = ?");
        assert_eq!(args, vec![Arg::from(1_i64), Arg::from(2_i64)]);

        let (sql, dollar_args) = ub
            .placeholder_format(PlaceholderFormat::Dollar)
            .build()
            .unwrap();
        assert_eq!(sql, "UPDATE test SET x = $1, y = $2");
        assert_eq!(dollar_args, args);
    }

    #[test]
    fn update_requires_table() {
        let err = update("").set("x", 1_i64).build().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingTable { statement: "update" })
        ));
    }

    #[test]
    fn update_requires_assignments() {
        let err = update("x").build().unwrap_err();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::MissingAssignments)
        );
    }

    #[test]
    #[should_panic(expected = "update statements must specify a table")]
    fn must_build_panics_on_invalid() {
        update("").set("x", 1_i64).must_build();
    }

    #[test]
    fn update_multiple_tables() {
        let _g = set_default_placeholder_format_scoped(PlaceholderFormat::Question);
        let (sql, _) = update(["a", "b"]).set("a.x", raw("b.x")).build().unwrap();
        assert_eq!(sql, "UPDATE a, b SET a.x = b.x");
    }

    #[test]
    fn update_from_and_where_join_with_separators() {
        let _g = set_default_placeholder_format_scoped(PlaceholderFormat::Question);
        let ub = update("employees")
            .set("sales_count", raw("sales_count + 1"))
            .from(["accounts", "regions"])
            .where_("accounts.name = 'Acme'")
            .where_("employees.id = accounts.sales_person");
        let (sql, args) = ub.build().unwrap();
        assert_eq!(
            sql,
            "UPDATE employees SET sales_count = sales_count + 1 \
             FROM accounts, regions \
             WHERE accounts.name = 'Acme' AND employees.id = accounts.sales_person"
        );
        assert!(args.is_empty());
    }

    #[test]
    fn update_from_select_orders_nested_args_first() {
        let sub = select("id")
            .from("accounts")
            .where_(expr("accounts.name = ?", ["ACME"]));
        let ub = update("employees")
            .set("sales_count", 1_i64)
            .from_select(sub, "subquery")
            .where_(expr("employees.account_id = subquery.id AND employees.id = ?", [7_i64]));

        let (sql, args) = ub.build_with_format(PlaceholderFormat::Dollar).unwrap();
        assert_eq!(
            sql,
            "UPDATE employees SET sales_count = $1 \
             FROM (SELECT id FROM accounts WHERE accounts.name = $2) AS subquery \
             WHERE employees.account_id = subquery.id AND employees.id = $3"
        );
        assert_eq!(
            args,
            vec![Arg::from(1_i64), Arg::from("ACME"), Arg::from(7_i64)]
        );
    }

    #[test]
    fn update_subquery_value_keeps_sibling_order() {
        let ub = update("t")
            .set("a", 1_i64)
            .set(
                "b",
                select("max(v)").from("u").where_(expr("k = ?", [2_i64])),
            )
            .set("c", 3_i64);
        let (sql, args) = ub.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(
            sql,
            "UPDATE t SET a = ?, b = (SELECT max(v) FROM u WHERE k = ?), c = ?"
        );
        assert_eq!(
            args,
            vec![Arg::from(1_i64), Arg::from(2_i64), Arg::from(3_i64)]
        );
    }

    #[test]
    fn update_null_and_list_values() {
        let ub = update("t")
            .set("a", ())
            .set("b", expr("COALESCE(b, ?)", [0_i64]))
            .set("c", vec![1_i64, 2]);
        let (sql, args) = ub.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(sql, "UPDATE t SET a = ?, b = COALESCE(b, ?), c = (?, ?)");
        assert_eq!(args.len(), 4);
        assert!(args[0].is_null());
    }

    #[test]
    fn update_byte_vec_is_one_value() {
        let (sql, args) = update("t")
            .set("blob", vec![0xAB_u8, 0xCD])
            .where_(eq! { "id" => 1_i64 })
            .build_with_format(PlaceholderFormat::Dollar)
            .unwrap();
        assert_eq!(sql, "UPDATE t SET blob = $1 WHERE id = $2");
        assert_eq!(
            args,
            vec![Arg::Value(SqlValue::Bytes(vec![0xAB, 0xCD])), Arg::from(1_i64)]
        );
    }

    #[test]
    fn update_is_copy_on_write() {
        let base = update("t").set("a", 1_i64);
        let extended = base.set("b", 2_i64).where_(expr("id = ?", [3_i64]));

        let (sql, args) = base.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(sql, "UPDATE t SET a = ?");
        assert_eq!(args.len(), 1);

        let (sql, _) = extended.build_with_format(PlaceholderFormat::Question).unwrap();
        assert_eq!(sql, "UPDATE t SET a = ?, b = ? WHERE id = ?");
    }

    #[test]
    fn update_without_where_has_no_keyword() {
        let (sql, _) = update("t")
            .set("a", 1_i64)
            .build_with_format(PlaceholderFormat::Question)
            .unwrap();
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn update_exec_records_sql() {
        let runner = Arc::new(RecordingRunner::default());
        update("t")
            .set("x", 1_i64)
            .placeholder_format(PlaceholderFormat::Dollar)
            .run_with(runner.clone())
            .exec()
            .unwrap();
        assert_eq!(runner.calls()[0].0, "UPDATE t SET x = $1");
    }

    #[test]
    fn update_exec_without_runner() {
        let err = update("t").set("x", 1_i64).exec().unwrap_err();
        assert!(matches!(err, Error::RunnerNotSet));
    }
}
