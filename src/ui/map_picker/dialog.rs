use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MAP_LAND, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

use super::state::MapPickerState;

pub fn render_map_picker(frame: &mut Frame, state: &MapPickerState) {
    let (Some(marker), Some((x_bounds, y_bounds))) = (state.marker(), state.bounds()) else {
        return;
    };

    let area = frame.area();
    let popup = centered_rect_by_size(
        area,
        area.width.saturating_mul(4) / 5,
        area.height.saturating_mul(4) / 5,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(" Pick Location ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let point = [(marker.longitude, marker.latitude)];
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: MAP_LAND,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &point,
                color: STATUS_ERROR,
            });
            ctx.print(
                marker.longitude,
                marker.latitude,
                Span::styled("✕", Style::default().fg(STATUS_ERROR)),
            );
        });
    frame.render_widget(canvas, rows[0]);

    let muted = Style::default().fg(MUTED_TEXT);
    let info = vec![
        Line::from(Span::styled(
            format!("{:.4}, {:.4}", marker.latitude, marker.longitude),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            "Arrows: Move  +/-: Zoom  r: Reset  Enter: Use  Esc: Cancel",
            muted.add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(info), rows[1]);
}
