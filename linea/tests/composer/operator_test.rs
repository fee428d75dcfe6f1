#[cfg(all(test, feature = "unstable-call-operator"))]
mod operator_tests {
    use crate::helpers::{capture_logs, divmod, render_divmod};
    use linea::Pipeline;
    use linea::warnings::UNSTABLE_CALL_OPERATOR;

    #[test]
    fn it_should_call_through_the_unstable_operator() {
        // Given
        let pipeline = Pipeline::new().then_tuple(divmod) >> render_divmod;

        // When
        let (result, logs) = capture_logs(|| &pipeline | (17, 5));

        // Then
        assert_eq!(result, pipeline.call((17, 5)));
        assert!(logs.contains(UNSTABLE_CALL_OPERATOR));
        assert!(logs.contains("linea::unstable"));
    }

    #[test]
    fn it_should_warn_on_every_use() {
        // Given
        let pipeline = Pipeline::new().then(|x: i32| x + 1);

        // When
        let (results, logs) = capture_logs(|| (&pipeline | (1,), &pipeline | (2,)));

        // Then
        assert_eq!(results, (2, 3));
        assert_eq!(logs.matches("experimental/unstable").count(), 2);
    }

    #[test]
    fn it_should_point_the_warning_at_the_call_site() {
        // Given
        let pipeline = Pipeline::new().then(|x: i32| x * 3);

        // When
        let (result, logs) = capture_logs(|| pipeline | (5,));

        // Then
        assert_eq!(result, 15);
        assert!(logs.contains("operator_test.rs"));
    }

    #[test]
    fn it_should_bind_the_call_operator_looser_than_then() {
        // Given
        let pipeline = Pipeline::new().then(|x: i32| x - 1);

        // When
        let (result, _) = capture_logs(|| pipeline >> (|x: i32| x * 10) | (4,));

        // Then
        assert_eq!(result, 30);
    }

    #[test]
    fn it_should_not_warn_for_the_call_method() {
        // Given
        let pipeline = Pipeline::new().then(|x: i32| x + 1);

        // When
        let (result, logs) = capture_logs(|| pipeline.call((1,)));

        // Then
        assert_eq!(result, 2);
        assert!(!logs.contains(UNSTABLE_CALL_OPERATOR));
    }
}
