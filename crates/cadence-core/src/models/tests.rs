#[cfg(test)]
mod model_tests {
    use jiff::civil::date;
    use serde_json::json;

    use crate::models::{ScheduleRequest, ScheduleResponse, SolutionEntry};

    fn create_test_request(preferred: Option<u32>) -> ScheduleRequest {
        ScheduleRequest::new(
            vec![date(2024, 6, 1), date(2024, 6, 3), date(2024, 6, 5)],
            vec![
                vec!["09:00".to_string(), "18:00".to_string()],
                vec!["07:30".to_string()],
                vec![],
            ],
            preferred,
        )
    }

    #[test]
    fn test_n_is_capped_by_day_count() {
        assert_eq!(create_test_request(Some(5)).n, Some(3));
        assert_eq!(create_test_request(Some(2)).n, Some(2));
        assert_eq!(create_test_request(None).n, None);
    }

    #[test]
    fn test_request_wire_shape_with_count() {
        let value = serde_json::to_value(create_test_request(Some(5))).unwrap();
        assert_eq!(
            value,
            json!({
                "times": [["09:00", "18:00"], ["07:30"], []],
                "days": ["2024-06-01", "2024-06-03", "2024-06-05"],
                "n": 3
            })
        );
    }

    #[test]
    fn test_request_omits_n_without_count() {
        let value = serde_json::to_value(create_test_request(None)).unwrap();
        assert!(value.get("n").is_none());
        assert_eq!(value["days"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_request_pretty_json_round_trips() {
        let request = create_test_request(Some(2));
        let text = request.to_json_pretty().unwrap();

        assert!(text.contains("\n  \"days\": ["));
        assert!(text.contains("\"n\": 2"));
        let parsed: ScheduleRequest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_request_entries_align_days_and_times() {
        let request = create_test_request(None);
        let entries: Vec<_> = request.entries().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(*entries[0].0, date(2024, 6, 1));
        assert_eq!(entries[0].1, ["09:00", "18:00"]);
        assert!(entries[2].1.is_empty());
    }

    #[test]
    fn test_decode_solution() {
        let response = ScheduleResponse::from_body(r#"{"solution": [["2024-06-01", "09:00"]]}"#);
        assert_eq!(
            response,
            ScheduleResponse::Solution(vec![SolutionEntry {
                date: "2024-06-01".to_string(),
                time: "09:00".to_string(),
            }])
        );
        assert!(response.message().is_none());
    }

    #[test]
    fn test_decode_message() {
        let response = ScheduleResponse::from_body(r#"{"message": "ok"}"#);
        assert_eq!(response.message(), Some("ok"));
        assert!(response.solution().is_none());
    }

    #[test]
    fn test_solution_wins_over_message() {
        let response = ScheduleResponse::from_value(json!({
            "message": "Schedule received successfully!",
            "solution": [["2024-06-02", "18:00"], ["2024-06-04", "07:00"]]
        }));
        assert_eq!(response.solution().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_solution_falls_back_to_message() {
        let response = ScheduleResponse::from_value(json!({
            "message": "partial",
            "solution": [["2024-06-02"]]
        }));
        assert_eq!(response.message(), Some("partial"));
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert!(matches!(
            ScheduleResponse::from_body(r#"{"error": "Invalid data"}"#),
            ScheduleResponse::Unrecognized(_)
        ));
        assert!(matches!(
            ScheduleResponse::from_body("<html>oops</html>"),
            ScheduleResponse::Unrecognized(serde_json::Value::String(_))
        ));
    }

    #[test]
    fn test_numeric_labels_are_stringified() {
        let response = ScheduleResponse::from_value(json!({ "solution": [["2024-06-01", 9]] }));
        assert_eq!(response.solution().unwrap()[0].time, "9");
    }

    #[test]
    fn test_solution_entry_display() {
        let entry = SolutionEntry {
            date: "2024-06-01".to_string(),
            time: "09:00".to_string(),
        };
        assert_eq!(entry.to_string(), "2024-06-01: 09:00");
    }
}
