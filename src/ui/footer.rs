use crate::ui::app::{Focus, Notice, NoticeLevel};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(focus: Focus) -> &'static str {
        match focus {
            Focus::List => " a: Add │ e: Edit │ d: Delete │ ↑↓: Move │ Ctrl+R: Reload │ q: Quit",
            Focus::Editor => " Tab: Switch field │ ↑↓: Edit another item │ Enter: Save",
            Focus::AddDialog => " Tab: Next │ Ctrl+L: Location │ Enter: Add │ Esc: Cancel",
            Focus::MapPicker => " Arrows: Move │ +/-: Zoom │ Enter: Use │ Esc: Cancel",
            Focus::PermissionPrompt => " ←→: Choose │ Enter: Confirm │ Esc: Deny",
        }
    }

    /// Hints on the left, version on the right. A live notice replaces the
    /// hints.
    pub fn widget(&self, area: Rect, focus: Focus, notice: Option<&Notice>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match notice {
            Some(notice) => {
                let color = match notice.level {
                    NoticeLevel::Info => STATUS_OK,
                    NoticeLevel::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => (Self::hints(focus).to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
