//! Bordered, centered popup used by all dialogs.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};

pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    fixed_width: Option<u16>,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            fixed_width: None,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Size of the popup before clamping to the available area.
    pub fn size(&self) -> (u16, u16) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let title_width = self.title.chars().count() as u16 + 2;
        let width = self
            .fixed_width
            .unwrap_or_else(|| content_width.max(title_width).saturating_add(4));
        let height = (self.lines.len() as u16).saturating_add(2);
        (width, height)
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let (width, height) = self.size();
        let popup_area = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, popup_area);
    }
}
