/// View model tests: rows built from stored thoughts
use chrono::NaiveDate;
use mind_dump::*;
use serde_json::json;

#[cfg(test)]
mod view_model_tests {
    use super::*;

    #[test]
    fn test_rows_from_store() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let storage = MemoryStorage::with_clock(Box::new(FixedClock::new(date)));
        storage.append("a").unwrap();
        storage.append("b").unwrap();

        let rows = build_rows(&storage.read_all_ordered().unwrap());

        let labels: Vec<String> = rows.iter().map(Row::label).collect();
        assert_eq!(labels, vec!["--- 2024-01-01 ---", "  - b", "  - a"]);
        assert!(!rows[0].is_selectable());
        assert!(rows[1].is_selectable());
    }

    #[test]
    fn test_rows_serialize_as_tagged_values() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows = vec![Row::Header(date), Row::Entry("buy milk".to_string())];

        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(
            value,
            json!([
                { "kind": "header", "value": "2024-01-01" },
                { "kind": "entry", "value": "buy milk" },
            ])
        );
    }
}
