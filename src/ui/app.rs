use std::time::{Duration, Instant};

use crate::config::ConfigStore;
use crate::list::{format_quantity, ListStore, ShoppingItem};
use crate::location::{LookupBridge, LookupEvent, PermissionTracker};
use crate::ui::add_dialog::{AddDialogIntent, AddDialogReducer, AddDialogState, LookupStatus};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::map_picker::{MapPickerIntent, MapPickerReducer, MapPickerState};
use crate::ui::mvi::Reducer;
use crate::ui::permission::{PermissionIntent, PermissionPromptState, PermissionReducer};

const NOTICE_TTL: Duration = Duration::from_millis(3500);

/// Which surface receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Editor,
    AddDialog,
    MapPicker,
    PermissionPrompt,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Short-lived message in the footer.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    expires_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    config: ConfigStore,
    store: ListStore,
    selected: usize,
    add_dialog: AddDialogState,
    editor: EditorState,
    map_picker: MapPickerState,
    permission_prompt: PermissionPromptState,
    permission: PermissionTracker,
    lookup: LookupBridge,
    notice: Option<Notice>,
}

impl App {
    pub fn new(
        store: ListStore,
        config: ConfigStore,
        permission: PermissionTracker,
        lookup: LookupBridge,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            config,
            store,
            selected: 0,
            add_dialog: AddDialogState::default(),
            editor: EditorState::default(),
            map_picker: MapPickerState::default(),
            permission_prompt: PermissionPromptState::default(),
            permission,
            lookup,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        if self.permission_prompt.is_visible() {
            Focus::PermissionPrompt
        } else if self.map_picker.is_visible() {
            Focus::MapPicker
        } else if self.add_dialog.is_visible() {
            Focus::AddDialog
        } else if self.editor.is_active() {
            Focus::Editor
        } else {
            Focus::List
        }
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.store.items().get(self.selected)
    }

    pub fn add_dialog(&self) -> &AddDialogState {
        &self.add_dialog
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn map_picker(&self) -> &MapPickerState {
        &self.map_picker
    }

    pub fn permission_prompt(&self) -> &PermissionPromptState {
        &self.permission_prompt
    }

    pub fn permission(&self) -> &PermissionTracker {
        &self.permission
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.expires_at <= Instant::now())
        {
            self.notice = None;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    fn show_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    // ---- list ----

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }

    /// Put the selected item into edit mode and load its values into the
    /// editor.
    pub fn begin_edit_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let id = item.id;
        let name = item.name.clone();
        let quantity = format_quantity(item.quantity);

        self.store.begin_edit(id);
        self.dispatch_editor(EditorIntent::Open { id, name, quantity });
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        if self.store.delete(id).is_some() && self.editor.target() == Some(id) {
            self.dispatch_editor(EditorIntent::Close);
        }
        self.clamp_selection();
    }

    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(summary) => {
                tracing::info!(
                    path = %self.config.path().display(),
                    ?summary,
                    "config reloaded"
                );
                self.show_notice(summary.describe(), NoticeLevel::Info);
            }
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.show_notice(err.to_string(), NoticeLevel::Error);
            }
        }
    }

    // ---- editor ----

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Move the selection while editing and put the newly selected item into
    /// edit mode. The unsaved buffer of the previous item is dropped.
    pub fn switch_edit_target(&mut self, delta: isize) {
        if !self.editor.is_active() {
            return;
        }
        self.move_selection(delta);
        let selected = self.selected_item().map(|item| item.id);
        if selected.is_some() && selected != self.editor.target() {
            self.begin_edit_selected();
        }
    }

    /// Write the edit buffer back to the store and leave edit mode.
    pub fn save_edit(&mut self) {
        let EditorState::Editing {
            id, name, quantity, ..
        } = &self.editor
        else {
            return;
        };
        self.store.commit_edit(*id, name, quantity);
        self.dispatch_editor(EditorIntent::Close);
    }

    // ---- add dialog ----

    pub fn dispatch_add_dialog(&mut self, intent: AddDialogIntent) {
        dispatch_mvi!(self, add_dialog, AddDialogReducer, intent);
    }

    pub fn open_add_dialog(&mut self) {
        self.dispatch_add_dialog(AddDialogIntent::Open);
    }

    /// Hide the dialog. The draft is kept; any location flow is abandoned.
    pub fn dismiss_add_dialog(&mut self) {
        if self.add_dialog.lookup.is_pending() {
            self.lookup.cancel();
        }
        dispatch_mvi!(self, map_picker, MapPickerReducer, MapPickerIntent::Close);
        self.dispatch_add_dialog(AddDialogIntent::Dismiss);
    }

    pub fn submit_add_dialog(&mut self) {
        let draft = &self.add_dialog;
        let result = self
            .store
            .add(&draft.name, &draft.quantity, draft.address.as_deref())
            .map(|items| items.len());
        match result {
            Ok(len) => {
                if self.add_dialog.lookup.is_pending() {
                    self.lookup.cancel();
                }
                self.dispatch_add_dialog(AddDialogIntent::Submitted);
                self.selected = len.saturating_sub(1);
            }
            Err(err) => self.dispatch_add_dialog(AddDialogIntent::Rejected {
                invalid_name: err.invalid_name(),
                invalid_quantity: err.invalid_quantity(),
            }),
        }
    }

    // ---- location flow ----

    /// Start the location flow for the draft, asking for permission first
    /// when needed.
    pub fn request_location(&mut self) {
        if !self.add_dialog.is_visible() || self.add_dialog.lookup.is_pending() {
            return;
        }
        if self.permission.has_permission() {
            self.start_location_lookup();
        } else if self.permission.needs_prompt() {
            let rationale = self.permission.should_show_rationale();
            dispatch_mvi!(
                self,
                permission_prompt,
                PermissionReducer,
                PermissionIntent::Show { rationale }
            );
        } else {
            let message = self.permission.advisory().message();
            self.show_notice(message, NoticeLevel::Error);
        }
    }

    pub fn toggle_permission_choice(&mut self) {
        dispatch_mvi!(
            self,
            permission_prompt,
            PermissionReducer,
            PermissionIntent::ToggleChoice
        );
    }

    /// Answer the permission prompt. `None` takes the highlighted choice.
    pub fn answer_permission(&mut self, granted: Option<bool>) {
        let Some(selected) = self.permission_prompt.allow_selected() else {
            return;
        };
        let granted = granted.unwrap_or(selected);
        dispatch_mvi!(
            self,
            permission_prompt,
            PermissionReducer,
            PermissionIntent::Hide
        );
        match self.permission.record_decision(granted) {
            None => self.start_location_lookup(),
            Some(advisory) => self.show_notice(advisory.message(), NoticeLevel::Error),
        }
    }

    fn start_location_lookup(&mut self) {
        self.lookup.request_location();
        self.dispatch_add_dialog(AddDialogIntent::LookupProgress(LookupStatus::Locating));
    }

    pub fn dispatch_map_picker(&mut self, intent: MapPickerIntent) {
        dispatch_mvi!(self, map_picker, MapPickerReducer, intent);
    }

    /// Use the marker position and look up its address.
    pub fn confirm_map_pick(&mut self) {
        let Some(marker) = self.map_picker.marker() else {
            return;
        };
        self.dispatch_map_picker(MapPickerIntent::Close);
        self.lookup.resolve_address(marker);
        self.dispatch_add_dialog(AddDialogIntent::LookupProgress(LookupStatus::Resolving));
    }

    pub fn cancel_map_pick(&mut self) {
        self.dispatch_map_picker(MapPickerIntent::Close);
        self.lookup.cancel();
        self.dispatch_add_dialog(AddDialogIntent::LookupProgress(LookupStatus::Idle));
    }

    pub fn on_lookup_event(&mut self, event: LookupEvent) {
        if !self.lookup.is_current(&event) || !self.add_dialog.is_visible() {
            tracing::debug!(
                generation = event.generation(),
                current = self.lookup.generation(),
                "dropping stale lookup result"
            );
            return;
        }

        match event {
            LookupEvent::LocationFix { location, .. } => {
                let map = self.config.get().map;
                self.dispatch_map_picker(MapPickerIntent::Open {
                    at: location,
                    span: map.zoom_span_degrees,
                    step: map.step_degrees,
                });
                self.dispatch_add_dialog(AddDialogIntent::LookupProgress(LookupStatus::Picking));
            }
            LookupEvent::LocationFailed { message, .. } => {
                self.show_notice(format!("Location unavailable: {}", message), NoticeLevel::Error);
                self.dispatch_add_dialog(AddDialogIntent::LookupFailed(message));
            }
            LookupEvent::AddressResolved { address, .. } => {
                self.dispatch_add_dialog(AddDialogIntent::AddressResolved(address));
            }
        }
    }
}
