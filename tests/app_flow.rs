mod common;

use common::{FailingResolver, FailingSource, TestApp, BERLIN};
use crossterm::event::KeyCode;
use shoplist::location::{
    FixedLocation, LocationData, LookupEvent, PermissionAdvisory, PermissionStatus, NO_ADDRESS,
};
use shoplist::ui::add_dialog::LookupStatus;
use shoplist::ui::app::{Focus, NoticeLevel};
use shoplist::ui::editor::EditorState;
use std::sync::Arc;

fn item_names(t: &TestApp) -> Vec<String> {
    t.app
        .store()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

// -- list and add dialog -------------------------------------------------------

#[test]
fn test_add_item_through_dialog() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "2");

    assert_eq!(t.app.focus(), Focus::List);
    assert!(!t.app.add_dialog().is_visible());
    let item = &t.app.store().items()[0];
    assert_eq!(item.name, "Bread");
    assert_eq!(item.quantity, 2.0);
    assert_eq!(item.address, "");
    assert_eq!(t.app.selected(), 0);
}

#[test]
fn test_rejected_add_flags_fields_and_keeps_dialog_open() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.press(KeyCode::Char('a'));
    t.press(KeyCode::Enter);

    let dialog = t.app.add_dialog();
    assert!(dialog.is_visible());
    assert!(dialog.invalid_name);
    assert!(dialog.invalid_quantity);
    assert!(t.app.store().is_empty());

    t.type_text("Eggs");
    t.press(KeyCode::Enter);
    let dialog = t.app.add_dialog();
    assert!(!dialog.invalid_name);
    assert!(dialog.invalid_quantity);

    t.press(KeyCode::Tab);
    t.type_text("12");
    t.press(KeyCode::Enter);
    assert!(!t.app.add_dialog().is_visible());
    assert_eq!(item_names(&t), vec!["Eggs"]);
}

#[test]
fn test_dismiss_keeps_draft_and_submit_clears_it() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.press(KeyCode::Char('a'));
    t.type_text("Mi");
    t.press(KeyCode::Esc);
    assert_eq!(t.app.focus(), Focus::List);

    t.press(KeyCode::Char('a'));
    assert_eq!(t.app.add_dialog().name, "Mi");
    t.type_text("lk");
    t.press(KeyCode::Tab);
    t.type_text("1");
    t.press(KeyCode::Enter);

    t.press(KeyCode::Char('a'));
    assert_eq!(t.app.add_dialog().name, "");
    assert_eq!(t.app.add_dialog().quantity, "");
    assert_eq!(item_names(&t), vec!["Milk"]);
}

#[test]
fn test_q_quits_from_list_only() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.press(KeyCode::Char('a'));
    t.press(KeyCode::Char('q'));
    assert!(!t.app.should_quit());
    assert_eq!(t.app.add_dialog().name, "q");

    t.press(KeyCode::Esc);
    t.press(KeyCode::Char('q'));
    assert!(t.app.should_quit());
}

// -- edit mode -----------------------------------------------------------------

#[test]
fn test_edit_and_save() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "2");
    t.press(KeyCode::Char('e'));

    assert_eq!(t.app.focus(), Focus::Editor);
    assert_eq!(t.app.store().editing().map(|item| item.id), Some(1));
    match t.app.editor() {
        EditorState::Editing { name, quantity, .. } => {
            assert_eq!(name, "Bread");
            assert_eq!(quantity, "2.0");
        }
        EditorState::Inactive => panic!("editor should be active"),
    }

    t.type_text(" rolls");
    t.press(KeyCode::Tab);
    for _ in 0..3 {
        t.press(KeyCode::Backspace);
    }
    t.type_text("6");
    t.press(KeyCode::Enter);

    assert_eq!(t.app.focus(), Focus::List);
    let item = &t.app.store().items()[0];
    assert_eq!(item.name, "Bread rolls");
    assert_eq!(item.quantity, 6.0);
    assert!(!item.is_editing);
}

#[test]
fn test_escape_does_not_leave_edit_mode() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "2");
    t.press(KeyCode::Enter);
    t.press(KeyCode::Esc);

    assert_eq!(t.app.focus(), Focus::Editor);
    assert!(t.app.store().items()[0].is_editing);
}

#[test]
fn test_arrow_keys_switch_edit_target() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "2");
    t.add_item("Eggs", "12");
    t.press(KeyCode::Up);
    t.press(KeyCode::Char('e'));
    t.type_text(" rolls");

    t.press(KeyCode::Down);
    assert_eq!(t.app.focus(), Focus::Editor);
    assert_eq!(t.app.selected(), 1);
    let editing: Vec<u32> = t
        .app
        .store()
        .items()
        .iter()
        .filter(|item| item.is_editing)
        .map(|item| item.id)
        .collect();
    assert_eq!(editing, vec![2]);
    match t.app.editor() {
        EditorState::Editing { id, name, .. } => {
            assert_eq!(*id, 2);
            assert_eq!(name, "Eggs");
        }
        EditorState::Inactive => panic!("editor should be active"),
    }

    // Already on the last row, the target stays put.
    t.press(KeyCode::Down);
    assert_eq!(t.app.editor().target(), Some(2));

    t.type_text(" large");
    t.press(KeyCode::Enter);
    assert_eq!(item_names(&t), vec!["Bread", "Eggs large"]);
    assert!(t.app.store().editing().is_none());
}

#[test]
fn test_edit_with_bad_quantity_saves_zero() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "2");
    t.press(KeyCode::Char('e'));
    t.press(KeyCode::Tab);
    t.type_text("x");
    t.press(KeyCode::Enter);

    assert_eq!(t.app.store().items()[0].quantity, 0.0);
}

#[test]
fn test_delete_selected_item() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "1");
    t.add_item("Eggs", "12");
    t.add_item("Milk", "1");
    assert_eq!(t.app.selected(), 2);

    t.press(KeyCode::Up);
    t.press(KeyCode::Char('d'));
    assert_eq!(item_names(&t), vec!["Bread", "Milk"]);
    assert_eq!(t.app.selected(), 1);

    t.press(KeyCode::Delete);
    assert_eq!(item_names(&t), vec!["Bread"]);
    assert_eq!(t.app.selected(), 0);
}

#[test]
fn test_delete_and_edit_hit_selected_row_after_id_reuse() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.add_item("Bread", "1");
    t.add_item("Eggs", "12");
    t.press(KeyCode::Up);
    t.press(KeyCode::Char('d'));
    assert_eq!(item_names(&t), vec!["Eggs"]);

    t.add_item("Milk", "1");
    assert_eq!(t.app.selected(), 1);
    t.press(KeyCode::Char('e'));
    assert_eq!(t.app.store().editing().map(|item| item.name.as_str()), Some("Milk"));
    t.press(KeyCode::Enter);

    t.press(KeyCode::Char('d'));
    assert_eq!(item_names(&t), vec!["Eggs"]);
}

#[test]
fn test_selection_is_clamped() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.press(KeyCode::Down);
    t.press(KeyCode::Char('d'));
    assert_eq!(t.app.selected(), 0);

    t.add_item("Bread", "1");
    t.press(KeyCode::Down);
    t.press(KeyCode::Down);
    assert_eq!(t.app.selected(), 0);
}

// -- location flow ---------------------------------------------------------------

#[test]
fn test_location_flow_attaches_address() {
    let mut t = TestApp::new(PermissionStatus::Granted);
    t.press(KeyCode::Char('a'));
    t.type_text("Milk");
    t.press(KeyCode::Tab);
    t.type_text("1");
    t.ctrl('l');
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Locating);

    match t.pump_lookup() {
        LookupEvent::LocationFix { location, .. } => assert_eq!(location, BERLIN),
        other => panic!("expected a fix, got {other:?}"),
    }
    assert_eq!(t.app.focus(), Focus::MapPicker);
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Picking);

    t.press(KeyCode::Right);
    assert_eq!(t.app.map_picker().marker(), Some(LocationData::new(52.5, 14.0)));
    t.press(KeyCode::Enter);
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Resolving);
    assert_eq!(t.app.focus(), Focus::AddDialog);

    t.pump_lookup();
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Resolved);
    assert_eq!(
        t.app.add_dialog().address.as_deref(),
        Some("Alexanderplatz 1, Berlin")
    );

    t.press(KeyCode::Enter);
    assert_eq!(t.app.store().items()[0].address, "Alexanderplatz 1, Berlin");
}

#[test]
fn test_address_button_starts_location_flow() {
    let mut t = TestApp::new(PermissionStatus::Granted);
    t.press(KeyCode::Char('a'));
    t.press(KeyCode::Tab);
    t.press(KeyCode::Tab);
    t.press(KeyCode::Enter);
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Locating);
    assert!(t.app.store().is_empty());
}

#[test]
fn test_resolver_failure_yields_no_address() {
    let mut t = TestApp::with(
        Arc::new(FixedLocation::new(BERLIN)),
        Arc::new(FailingResolver),
        PermissionStatus::Granted,
    );
    t.press(KeyCode::Char('a'));
    t.ctrl('l');
    t.pump_lookup();
    t.press(KeyCode::Enter);
    t.pump_lookup();

    assert_eq!(t.app.add_dialog().address.as_deref(), Some(NO_ADDRESS));
}

#[test]
fn test_location_failure_is_reported() {
    let mut t = TestApp::with(
        Arc::new(FailingSource),
        Arc::new(FailingResolver),
        PermissionStatus::Granted,
    );
    t.press(KeyCode::Char('a'));
    t.ctrl('l');
    t.pump_lookup();

    assert!(matches!(t.app.add_dialog().lookup, LookupStatus::Failed(_)));
    assert!(!t.app.map_picker().is_visible());
    let notice = t.app.notice().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
}

#[test]
fn test_cancel_map_drops_late_results() {
    let mut t = TestApp::new(PermissionStatus::Granted);
    t.press(KeyCode::Char('a'));
    t.ctrl('l');
    let fix = t.pump_lookup();

    t.press(KeyCode::Esc);
    assert!(!t.app.map_picker().is_visible());
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Idle);
    assert_eq!(t.app.focus(), Focus::AddDialog);

    t.app.on_lookup_event(LookupEvent::AddressResolved {
        generation: fix.generation(),
        address: "Stale Street".to_string(),
    });
    assert_eq!(t.app.add_dialog().address, None);
}

#[test]
fn test_dismiss_while_locating_cancels_lookup() {
    let mut t = TestApp::new(PermissionStatus::Granted);
    t.press(KeyCode::Char('a'));
    t.ctrl('l');
    t.press(KeyCode::Esc);

    // The fix may already be on its way; it must be ignored.
    if let Ok(shoplist::ui::events::AppEvent::Lookup(event)) =
        t.events.recv_timeout(std::time::Duration::from_millis(500))
    {
        t.app.on_lookup_event(event);
    }
    assert!(!t.app.map_picker().is_visible());

    t.press(KeyCode::Char('a'));
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Idle);
}

// -- permission ----------------------------------------------------------------

#[test]
fn test_permission_prompt_allow_continues_flow() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.press(KeyCode::Char('a'));
    t.ctrl('l');
    assert_eq!(t.app.focus(), Focus::PermissionPrompt);
    assert_eq!(t.app.permission_prompt().allow_selected(), Some(true));

    t.press(KeyCode::Enter);
    assert_eq!(t.app.permission().status(), PermissionStatus::Granted);
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Locating);

    t.pump_lookup();
    assert!(t.app.map_picker().is_visible());
}

#[test]
fn test_permission_denied_twice_becomes_permanent() {
    let mut t = TestApp::new(PermissionStatus::NotDetermined);
    t.press(KeyCode::Char('a'));

    t.ctrl('l');
    t.press(KeyCode::Char('n'));
    assert_eq!(t.app.permission().status(), PermissionStatus::Denied);
    assert_eq!(
        t.app.notice().map(|notice| notice.text.as_str()),
        Some(PermissionAdvisory::RationaleRequired.message())
    );
    assert_eq!(t.app.focus(), Focus::AddDialog);

    t.ctrl('l');
    assert_eq!(t.app.focus(), Focus::PermissionPrompt);
    // Choose Deny with the arrow keys this time.
    t.press(KeyCode::Right);
    t.press(KeyCode::Enter);
    assert_eq!(t.app.permission().status(), PermissionStatus::DeniedPermanently);
    assert_eq!(
        t.app.notice().map(|notice| notice.text.as_str()),
        Some(PermissionAdvisory::EnableInSettings.message())
    );

    // No more prompts.
    t.ctrl('l');
    assert_eq!(t.app.focus(), Focus::AddDialog);
    assert_eq!(t.app.add_dialog().lookup, LookupStatus::Idle);
}

#[test]
fn test_location_request_outside_dialog_is_ignored() {
    let mut t = TestApp::new(PermissionStatus::Granted);
    t.ctrl('l');
    assert_eq!(t.app.focus(), Focus::List);
    assert!(t
        .events
        .recv_timeout(std::time::Duration::from_millis(100))
        .is_err());
}
