#[cfg(test)]
mod evaluator_tests {
    use cronparse_core::CronParseError;
    use cronparse_domain::CronField;
    use cronparse_parser::evaluate;

    #[test]
    fn test_single_value() {
        assert_eq!(evaluate(CronField::Minute, "5").unwrap(), vec![5]);
        assert_eq!(evaluate(CronField::Hour, "0").unwrap(), vec![0]);
        assert_eq!(evaluate(CronField::DayOfWeek, "7").unwrap(), vec![7]);
    }

    #[test]
    fn test_single_value_rejects_non_numeric() {
        assert!(evaluate(CronField::Minute, "abc").is_err());
        assert!(evaluate(CronField::Minute, "1.5").is_err());
        assert!(evaluate(CronField::Minute, "").is_err());
    }

    #[test]
    fn test_single_value_rejects_out_of_range() {
        let err = evaluate(CronField::Minute, "99").unwrap_err();
        assert!(matches!(err, CronParseError::OutOfRange { value: 99, .. }));
        let message = err.to_string();
        assert!(message.contains("minute"));
        assert!(message.contains("0-59"));

        assert!(evaluate(CronField::DayOfWeek, "0").is_err());
        assert!(evaluate(CronField::Month, "13").is_err());
    }

    #[test]
    fn test_range_expands_inclusive() {
        assert_eq!(evaluate(CronField::Minute, "1-5").unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(evaluate(CronField::Hour, "22-23").unwrap(), vec![22, 23]);
        // 单点范围
        assert_eq!(evaluate(CronField::Month, "6-6").unwrap(), vec![6]);
    }

    #[test]
    fn test_range_clamps_to_field_bounds() {
        // dayOfMonth 的最小值为1, 0被截掉
        assert_eq!(
            evaluate(CronField::DayOfMonth, "0-5").unwrap(),
            vec![1, 2, 3, 4, 5]
        );
        // 超过最大值的部分被截掉
        let values = evaluate(CronField::Minute, "0-99").unwrap();
        assert_eq!(values.len(), 60);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&59));
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = evaluate(CronField::Hour, "5-1").unwrap_err();
        assert!(matches!(
            err,
            CronParseError::InvertedRange { start: 5, end: 1, .. }
        ));
    }

    #[test]
    fn test_range_rejects_malformed_bounds() {
        let err = evaluate(CronField::Month, "1-5a").unwrap_err();
        assert!(matches!(err, CronParseError::InvalidRange { .. }));
        assert!(err.to_string().contains("1-5a"));

        assert!(evaluate(CronField::Month, "1-2-3").is_err());
        assert!(evaluate(CronField::Month, "-5").is_err());
        assert!(evaluate(CronField::Month, "1-").is_err());
    }

    #[test]
    fn test_step_over_explicit_range() {
        assert_eq!(
            evaluate(CronField::Minute, "0-10/2").unwrap(),
            vec![0, 2, 4, 6, 8, 10]
        );
        // 步长从起点开始累加, 不是模运算过滤
        assert_eq!(evaluate(CronField::Minute, "1-10/3").unwrap(), vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_step_with_implicit_base_runs_to_field_max() {
        // 裸数字基值表示从该值到字段最大值
        assert_eq!(
            evaluate(CronField::DayOfMonth, "3/4").unwrap(),
            vec![3, 7, 11, 15, 19, 23, 27, 31]
        );
        assert_eq!(evaluate(CronField::Hour, "20/2").unwrap(), vec![20, 22]);
    }

    #[test]
    fn test_step_over_wildcard_base() {
        let values = evaluate(CronField::Minute, "*/15").unwrap();
        assert_eq!(values, vec![0, 15, 30, 45]);
    }

    #[test]
    fn test_step_rejects_missing_or_invalid_step() {
        let err = evaluate(CronField::Hour, "1/").unwrap_err();
        assert!(matches!(err, CronParseError::MissingStep { .. }));

        let err = evaluate(CronField::Hour, "1/5a").unwrap_err();
        assert!(matches!(err, CronParseError::InvalidStep { .. }));
        let message = err.to_string();
        assert!(message.contains("hour"));
        assert!(message.contains("5a"));

        assert!(evaluate(CronField::Hour, "1/0").is_err());
        assert!(evaluate(CronField::Hour, "1/2/3").is_err());
        assert!(evaluate(CronField::Hour, "/2").is_err());
    }

    #[test]
    fn test_wildcard_expands_full_field_range() {
        let hours = evaluate(CronField::Hour, "*").unwrap();
        assert_eq!(hours, (0..=23).collect::<Vec<u32>>());

        let minutes = evaluate(CronField::Minute, "*").unwrap();
        assert_eq!(minutes.len(), 60);

        assert_eq!(
            evaluate(CronField::DayOfWeek, "*").unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_wildcard_rejects_trailing_characters() {
        // 识别出星号后残留的字符不允许被静默截断
        assert!(evaluate(CronField::DayOfWeek, "*a").is_err());
        assert!(evaluate(CronField::Minute, "a*").is_err());
    }

    #[test]
    fn test_list_expands_and_sorts() {
        assert_eq!(evaluate(CronField::Minute, "1,3,5").unwrap(), vec![1, 3, 5]);
        // 无序输入在顶层统一排序
        assert_eq!(evaluate(CronField::Minute, "5,1,3").unwrap(), vec![1, 3, 5]);
        // 去重在顶层统一处理
        assert_eq!(evaluate(CronField::Minute, "1,1,1-3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_elements_recurse_into_other_forms() {
        assert_eq!(
            evaluate(CronField::Minute, "1, 3-5, */20").unwrap(),
            vec![0, 1, 3, 4, 5, 20, 40]
        );
        assert_eq!(
            evaluate(CronField::DayOfWeek, "1-2,5-6").unwrap(),
            vec![1, 2, 5, 6]
        );
    }

    #[test]
    fn test_list_rejects_invalid_element() {
        let err = evaluate(CronField::Minute, "1,2a").unwrap_err();
        assert!(matches!(err, CronParseError::InvalidNumber { .. }));
        assert!(err.to_string().contains("2a"));

        assert!(evaluate(CronField::Minute, "1,,2").is_err());
    }
}
