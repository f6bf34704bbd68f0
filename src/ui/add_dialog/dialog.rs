use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::list::AddError;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{AddDialogState, AddField, LookupStatus};

const DIALOG_WIDTH: u16 = 52;

pub fn render_add_dialog(frame: &mut Frame, state: &AddDialogState) {
    if !state.is_visible() {
        return;
    }

    let label = Style::default().fg(MUTED_TEXT);
    let error = Style::default().fg(STATUS_ERROR);
    let mut lines = vec![Line::from(Span::styled("Item Name", label))];
    lines.push(input_line(&state.name, state.focused == AddField::Name));
    if state.invalid_name {
        lines.push(Line::from(Span::styled(AddError::InvalidName.to_string(), error)));
    }

    lines.push(Line::from(Span::styled("Item Quantity", label)));
    lines.push(input_line(&state.quantity, state.focused == AddField::Quantity));

    lines.push(Line::from(""));
    let mut button = Style::default().fg(HEADER_TEXT);
    if state.focused == AddField::Address {
        button = button.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    let mut address_line = vec![Span::styled("[ Address ]", button), Span::raw("  ")];
    address_line.extend(lookup_span(state));
    lines.push(Line::from(address_line));

    if state.invalid_quantity {
        lines.push(Line::from(Span::styled(
            AddError::InvalidQuantity.to_string(),
            error,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab: Next  ^L: Location  Enter: Add  Esc: Cancel",
        label.add_modifier(Modifier::DIM),
    )));

    let area = frame.area();
    PopupDialog::new("Add Shopping Item", lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, area);
}

fn input_line(text: &str, focused: bool) -> Line<'static> {
    let (style, cursor) = if focused {
        (Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT), "▏")
    } else {
        (Style::default().fg(HEADER_TEXT), "")
    };
    Line::from(Span::styled(format!("> {}{}", text, cursor), style))
}

fn lookup_span(state: &AddDialogState) -> Option<Span<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    match &state.lookup {
        LookupStatus::Idle => state
            .address
            .as_ref()
            .map(|address| Span::styled(address.clone(), Style::default().fg(STATUS_OK))),
        LookupStatus::Locating => Some(Span::styled("Locating…", muted)),
        LookupStatus::Picking => Some(Span::styled("Choosing on map…", muted)),
        LookupStatus::Resolving => Some(Span::styled("Resolving address…", muted)),
        LookupStatus::Resolved => Some(Span::styled(
            state.address.clone().unwrap_or_default(),
            Style::default().fg(STATUS_OK),
        )),
        LookupStatus::Failed(message) => Some(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )),
    }
}
