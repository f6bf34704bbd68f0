use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::location::PermissionAdvisory;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};

use super::state::PermissionPromptState;

pub fn render_permission_prompt(frame: &mut Frame, state: &PermissionPromptState) {
    let PermissionPromptState::Visible {
        rationale,
        allow_selected,
    } = state
    else {
        return;
    };

    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![Line::from(Span::styled(
        "Allow this app to access your location?",
        text,
    ))];
    if *rationale {
        lines.push(Line::from(Span::styled(
            PermissionAdvisory::RationaleRequired.message(),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));

    let selected = text.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    let (allow, deny) = if *allow_selected {
        (selected, text)
    } else {
        (text, selected)
    };
    lines.push(Line::from(vec![
        Span::styled("[ Allow ]", allow),
        Span::raw("  "),
        Span::styled("[ Deny ]", deny),
    ]));

    let area = frame.area();
    PopupDialog::new("Location Permission", lines).render(frame, area);
}
