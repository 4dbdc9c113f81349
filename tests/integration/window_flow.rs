/// Window submit/refresh flow against a database file
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mind_dump::*;
use std::rc::Rc;
use tempfile::NamedTempFile;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn submit_text<S: ThoughtStorage>(window: &mut Window<'_, S>, text: &str) {
    for c in text.chars() {
        window.handle_key(press(KeyCode::Char(c))).unwrap();
    }
    window.handle_key(press(KeyCode::Enter)).unwrap();
}

#[cfg(test)]
mod window_flow_tests {
    use super::*;

    #[test]
    fn test_list_rebuilt_after_each_submit() {
        let day1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let clock = Rc::new(FixedClock::new(day1));
        let storage = SqliteStorage::with_clock(
            temp_file.path().to_path_buf(),
            Box::new(Rc::clone(&clock)),
        )
        .expect("Failed to create storage");

        let mut window = Window::new(&storage).expect("Failed to open window");
        assert!(window.rows().is_empty());

        submit_text(&mut window, "a");
        submit_text(&mut window, "b");
        clock.set(day2);
        submit_text(&mut window, "c");

        assert_eq!(
            window.rows(),
            &[
                Row::Header(day2),
                Row::Entry("c".to_string()),
                Row::Header(day1),
                Row::Entry("b".to_string()),
                Row::Entry("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf())
            .expect("Failed to create storage");
        let mut window = Window::new(&storage).expect("Failed to open window");

        submit_text(&mut window, " \t ");

        assert_eq!(window.input(), " \t ");
        assert_eq!(storage.count().unwrap(), 0);
    }

    #[test]
    fn test_window_loads_existing_log() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        storage.append("from last session").unwrap();
        storage.close().unwrap();

        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let window = Window::new(&storage).expect("Failed to open window");

        assert_eq!(window.rows().len(), 2);
        assert_eq!(window.rows()[1], Row::Entry("from last session".to_string()));
    }
}
