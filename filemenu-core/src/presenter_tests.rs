use std::cell::RefCell;

use super::*;
use crate::relative_time::{EnglishRelativeTime, FixedClock};
use crate::styled::StyleSpan;

/// Shows every row, so the presenter alone is responsible for hiding lock rows.
struct ShowEverything;

impl ActionFilter for ShowEverything {
    fn filter(&self, menu: &mut Menu, _file: &FileEntry) {
        for id in MenuEntryId::ALL {
            menu.set_visible(id, true);
        }
    }
}

#[derive(Default)]
struct RecordingFormatter {
    calls: RefCell<Vec<(i64, i64, bool)>>,
}

impl RelativeTimeFormatter for RecordingFormatter {
    fn format(&self, instant_ms: i64, now_ms: i64, show_future: bool) -> String {
        self.calls.borrow_mut().push((instant_ms, now_ms, show_future));
        format!("at {instant_ms}")
    }
}

const NOW_MS: i64 = 1_000_000;

fn locked_file(lock_type: LockType) -> FileEntry {
    FileEntry {
        remote_path: "/Docs/report.odt".into(),
        is_locked: true,
        lock_type,
        lock_owner_id: "bob".into(),
        lock_timestamp: 1_000,
        lock_timeout: 600,
        ..FileEntry::default()
    }
}

fn title(menu: &Menu, id: MenuEntryId) -> String {
    menu.find(id)
        .map(|entry| entry.title.as_str().to_string())
        .unwrap_or_default()
}

#[test]
fn unlocked_files_never_show_lock_rows() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    for lock_type in [
        LockType::None,
        LockType::Manual,
        LockType::Collaborative,
        LockType::Token,
    ] {
        let file = FileEntry {
            is_locked: false,
            ..locked_file(lock_type)
        };
        let menu = presenter.build(&file, &ShowEverything);
        assert!(!menu.is_visible(MenuEntryId::LockedBy));
        assert!(!menu.is_visible(MenuEntryId::LockedUntil));
        assert!(title(&menu, MenuEntryId::LockedBy).is_empty());
        assert!(menu.is_visible(MenuEntryId::Rename));
    }
    assert!(formatter.calls.borrow().is_empty());
}

#[test]
fn missing_timing_hides_locked_until() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let no_timestamp = FileEntry {
        lock_timestamp: 0,
        ..locked_file(LockType::Manual)
    };
    let no_timeout = FileEntry {
        lock_timeout: 0,
        ..locked_file(LockType::Manual)
    };
    for file in [no_timestamp, no_timeout] {
        let menu = presenter.build(&file, &ShowEverything);
        assert!(menu.is_visible(MenuEntryId::LockedBy));
        assert!(!menu.is_visible(MenuEntryId::LockedUntil));
    }
    assert!(formatter.calls.borrow().is_empty());
}

#[test]
fn manual_lock_scenario() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let menu = presenter.build(&locked_file(LockType::Manual), &ShowEverything);

    let locked_by = menu.find(MenuEntryId::LockedBy).unwrap();
    assert!(locked_by.visible);
    assert_eq!(locked_by.title.as_str(), "Locked by bob");
    assert_eq!(
        locked_by.title.spans,
        vec![StyleSpan {
            start: 10,
            end: 13,
            style: TextStyle::Bold
        }]
    );

    assert!(menu.is_visible(MenuEntryId::LockedUntil));
    assert_eq!(
        title(&menu, MenuEntryId::LockedUntil),
        "Expires: at 1600000"
    );
    assert_eq!(*formatter.calls.borrow(), vec![(1_600_000, NOW_MS, true)]);
}

#[test]
fn display_name_wins_over_owner_id() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let file = FileEntry {
        lock_owner_id: "alice123".into(),
        lock_owner_display_name: Some("Alice".into()),
        ..locked_file(LockType::Manual)
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert_eq!(title(&menu, MenuEntryId::LockedBy), "Locked by Alice");

    let file = FileEntry {
        lock_owner_display_name: None,
        ..file
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert_eq!(title(&menu, MenuEntryId::LockedBy), "Locked by alice123");
}

#[test]
fn only_collaborative_locks_use_app_phrasing() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let file = FileEntry {
        lock_owner_id: "text".into(),
        lock_owner_display_name: Some("Nextcloud Text".into()),
        ..locked_file(LockType::Collaborative)
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert_eq!(
        title(&menu, MenuEntryId::LockedBy),
        "Locked by Nextcloud Text app"
    );
    assert_eq!(
        menu.find(MenuEntryId::LockedBy).unwrap().title.to_markup(),
        "Locked by <b>Nextcloud Text</b> app"
    );

    for lock_type in [LockType::None, LockType::Manual, LockType::Token] {
        let menu = presenter.build(&locked_file(lock_type), &ShowEverything);
        assert_eq!(title(&menu, MenuEntryId::LockedBy), "Locked by bob");
    }
}

#[test]
fn empty_owner_renders_empty_name_segment() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let file = FileEntry {
        lock_owner_id: String::new(),
        lock_owner_display_name: None,
        ..locked_file(LockType::Manual)
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert!(menu.is_visible(MenuEntryId::LockedBy));
    assert_eq!(title(&menu, MenuEntryId::LockedBy), "Locked by ");
}

#[test]
fn overflowing_expiry_wraps_without_panicking() {
    let file = FileEntry {
        lock_timestamp: i64::MAX,
        lock_timeout: 1,
        ..locked_file(LockType::Manual)
    };
    assert_eq!(
        lock_expiration_millis(&file),
        Some(i64::MIN.wrapping_mul(1_000))
    );

    let strings = StringCatalog::default();
    let formatter = EnglishRelativeTime::default();
    let clock = FixedClock(NOW_MS);
    let menu = LockAwareMenuPresenter::new(&strings, &formatter, &clock)
        .build(&file, &ShowEverything);
    assert!(menu.is_visible(MenuEntryId::LockedUntil));
}

#[test]
fn negative_timing_is_passed_through() {
    let file = FileEntry {
        lock_timestamp: -10,
        lock_timeout: 5,
        ..locked_file(LockType::Manual)
    };
    assert_eq!(lock_expiration_millis(&file), Some(-5_000));
}

#[test]
fn english_formatter_renders_expiry() {
    let strings = StringCatalog::default();
    let formatter = EnglishRelativeTime::default();
    let clock = FixedClock(NOW_MS);
    let menu = LockAwareMenuPresenter::new(&strings, &formatter, &clock)
        .build(&locked_file(LockType::Manual), &ShowEverything);
    assert_eq!(
        title(&menu, MenuEntryId::LockedUntil),
        "Expires: in 10 minutes"
    );
}

#[test]
fn dividers_setting_reaches_menu() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let menu = LockAwareMenuPresenter::new(&strings, &formatter, &clock)
        .with_group_dividers(false)
        .build(&locked_file(LockType::Manual), &ShowEverything);
    assert!(!menu.group_dividers());
    assert_eq!(menu.sections().len(), 1);
}

#[test]
fn owner_span_covers_name_even_when_template_contains_it() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    for (owner, markup) in [
        ("ed", "Locked by <b>ed</b>"),
        ("Lock", "Locked by <b>Lock</b>"),
        ("by", "Locked by <b>by</b>"),
        ("Locked", "Locked by <b>Locked</b>"),
    ] {
        let file = FileEntry {
            lock_owner_id: owner.into(),
            ..locked_file(LockType::Manual)
        };
        let menu = presenter.build(&file, &ShowEverything);
        let locked_by = menu.find(MenuEntryId::LockedBy).unwrap();
        assert_eq!(locked_by.title.to_markup(), markup, "owner {owner:?}");
        assert_eq!(
            locked_by.title.spans,
            vec![StyleSpan {
                start: 10,
                end: 10 + owner.len(),
                style: TextStyle::Bold
            }]
        );
    }
}

#[test]
fn app_phrasing_spans_owner_inside_template_words() {
    let strings = StringCatalog::default();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let file = FileEntry {
        lock_owner_id: "app".into(),
        ..locked_file(LockType::Collaborative)
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert_eq!(
        menu.find(MenuEntryId::LockedBy).unwrap().title.to_markup(),
        "Locked by <b>app</b> app"
    );
}

#[test]
fn overridden_template_with_leading_placeholder() {
    let strings = StringCatalog::from_json(
        r#"{"locked_by": "%1$s hat gesperrt", "locked_by_app": "App %1$s hat gesperrt"}"#,
    )
    .unwrap();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let presenter = LockAwareMenuPresenter::new(&strings, &formatter, &clock);

    let file = FileEntry {
        lock_owner_id: "hat".into(),
        ..locked_file(LockType::Manual)
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert_eq!(
        menu.find(MenuEntryId::LockedBy).unwrap().title.to_markup(),
        "<b>hat</b> hat gesperrt"
    );

    let file = FileEntry {
        lock_owner_id: "App".into(),
        ..locked_file(LockType::Collaborative)
    };
    let menu = presenter.build(&file, &ShowEverything);
    assert_eq!(
        menu.find(MenuEntryId::LockedBy).unwrap().title.to_markup(),
        "App <b>App</b> hat gesperrt"
    );
}

#[test]
fn template_without_placeholder_stays_plain() {
    let strings = StringCatalog::from_json(r#"{"locked_by": "Locked"}"#).unwrap();
    let formatter = RecordingFormatter::default();
    let clock = FixedClock(NOW_MS);
    let menu = LockAwareMenuPresenter::new(&strings, &formatter, &clock)
        .build(&locked_file(LockType::Manual), &ShowEverything);
    let locked_by = menu.find(MenuEntryId::LockedBy).unwrap();
    assert_eq!(locked_by.title.as_str(), "Locked");
    assert!(locked_by.title.spans.is_empty());
}
