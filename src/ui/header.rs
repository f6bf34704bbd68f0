use crate::location::PermissionStatus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, item_count: usize, permission: PermissionStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, label) = match permission {
            PermissionStatus::Granted => (Style::default().fg(STATUS_OK), "location on"),
            PermissionStatus::NotDetermined | PermissionStatus::Denied => {
                (Style::default().fg(HEADER_SEPARATOR), "location not granted")
            }
            PermissionStatus::DeniedPermanently => {
                (Style::default().fg(STATUS_ERROR), "location denied")
            }
        };
        let items = match item_count {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Shopping List", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(items, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", dot),
            Span::styled(label, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
