use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::add_dialog::{AddDialogIntent, AddField};
use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorIntent;
use crate::ui::map_picker::MapPickerIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::PermissionPrompt => handle_permission_key(app, key),
        Focus::MapPicker => handle_map_key(app, key),
        Focus::AddDialog => handle_add_dialog_key(app, key),
        Focus::Editor => handle_editor_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.save_edit(),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_editor(EditorIntent::ToggleField),
        KeyCode::Up => app.switch_edit_target(-1),
        KeyCode::Down => app.switch_edit_target(1),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Char(ch) if !has_control(key) => app.dispatch_editor(EditorIntent::Input(ch)),
        // Saving is the only way out of edit mode.
        _ => {}
    }
}

fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.request_location();
        return;
    }
    match key.code {
        KeyCode::Esc => app.dismiss_add_dialog(),
        KeyCode::Enter if app.add_dialog().focused == AddField::Address => {
            app.request_location()
        }
        KeyCode::Enter => app.submit_add_dialog(),
        KeyCode::Tab => app.dispatch_add_dialog(AddDialogIntent::NextField),
        KeyCode::BackTab => app.dispatch_add_dialog(AddDialogIntent::PrevField),
        KeyCode::Backspace => app.dispatch_add_dialog(AddDialogIntent::Backspace),
        KeyCode::Char(ch) if !has_control(key) => {
            app.dispatch_add_dialog(AddDialogIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_map_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Enter => return app.confirm_map_pick(),
        KeyCode::Esc => return app.cancel_map_pick(),
        KeyCode::Up => MapPickerIntent::MoveUp,
        KeyCode::Down => MapPickerIntent::MoveDown,
        KeyCode::Left => MapPickerIntent::MoveLeft,
        KeyCode::Right => MapPickerIntent::MoveRight,
        KeyCode::Char('+') | KeyCode::Char('=') => MapPickerIntent::ZoomIn,
        KeyCode::Char('-') => MapPickerIntent::ZoomOut,
        KeyCode::Char('r') => MapPickerIntent::Reset,
        _ => return,
    };
    app.dispatch_map_picker(intent);
}

fn handle_permission_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_permission_choice(),
        KeyCode::Enter => app.answer_permission(None),
        KeyCode::Char('y') => app.answer_permission(Some(true)),
        KeyCode::Char('n') | KeyCode::Esc => app.answer_permission(Some(false)),
        _ => {}
    }
}

fn has_control(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
