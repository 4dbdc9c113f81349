/// The same append/read contract checked against both storage engines
use chrono::NaiveDate;
use mind_dump::*;
use std::rc::Rc;

const BLANK_INPUTS: [&str; 4] = ["", " ", "\t\n", "    "];

fn engines(clock: Rc<FixedClock>) -> Vec<(&'static str, Box<dyn ThoughtStorage>)> {
    vec![
        (
            "sqlite",
            Box::new(SqliteStorage::open_in_memory(Box::new(Rc::clone(&clock))).unwrap())
                as Box<dyn ThoughtStorage>,
        ),
        (
            "memory",
            Box::new(MemoryStorage::with_clock(Box::new(clock))) as Box<dyn ThoughtStorage>,
        ),
    ]
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
}

#[cfg(test)]
mod storage_contract_tests {
    use super::*;

    #[test]
    fn test_blank_input_never_stored() {
        for (name, storage) in engines(Rc::new(FixedClock::new(day(1)))) {
            storage.append("existing").unwrap();

            for raw in BLANK_INPUTS {
                let accepted = storage.append(normalize_input(raw)).unwrap();
                assert!(!accepted, "{name}: accepted {raw:?}");
            }
            assert_eq!(storage.count().unwrap(), 1, "{name}");
        }
    }

    #[test]
    fn test_appended_text_read_back_dated_today() {
        for (name, storage) in engines(Rc::new(FixedClock::new(day(9)))) {
            assert!(storage.append("remember the keys").unwrap());

            let thoughts = storage.read_all_ordered().unwrap();
            assert!(
                thoughts.iter().any(|t| t.as_pair() == (day(9), "remember the keys")),
                "{name}"
            );
        }
    }

    #[test]
    fn test_n_appends_read_back_exactly() {
        let submitted = ["  one", "two  ", " three ", "four", "five five"];

        for (name, storage) in engines(Rc::new(FixedClock::new(day(3)))) {
            for raw in submitted {
                assert!(storage.append(normalize_input(raw)).unwrap());
            }

            let mut texts: Vec<String> = storage
                .read_all_ordered()
                .unwrap()
                .into_iter()
                .map(|t| t.text)
                .collect();
            texts.reverse();

            let expected: Vec<&str> = submitted.iter().map(|s| s.trim()).collect();
            assert_eq!(texts, expected, "{name}");
        }
    }

    #[test]
    fn test_order_across_simulated_days() {
        let clock = Rc::new(FixedClock::new(day(1)));
        let schedule = [(5, "e1"), (1, "a1"), (3, "c1"), (1, "a2"), (5, "e2"), (3, "c2")];

        for (name, storage) in engines(Rc::clone(&clock)) {
            for (d, text) in schedule {
                clock.set(day(d));
                storage.append(text).unwrap();
            }

            let thoughts = storage.read_all_ordered().unwrap();
            let texts: Vec<&str> = thoughts.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, vec!["e2", "e1", "c2", "c1", "a2", "a1"], "{name}");

            for pair in thoughts.windows(2) {
                let (newer, older) = (&pair[0], &pair[1]);
                assert!(
                    newer.date > older.date || (newer.date == older.date && newer.id > older.id),
                    "{name}: {newer:?} before {older:?}"
                );
            }
        }
    }

    #[test]
    fn test_same_day_latest_first() {
        for (name, storage) in engines(Rc::new(FixedClock::new(day(1)))) {
            storage.append("a").unwrap();
            storage.append("b").unwrap();

            let pairs: Vec<_> = storage
                .read_all_ordered()
                .unwrap()
                .into_iter()
                .map(|t| (t.date, t.text))
                .collect();
            assert_eq!(
                pairs,
                vec![(day(1), "b".to_string()), (day(1), "a".to_string())],
                "{name}"
            );
        }
    }
}
