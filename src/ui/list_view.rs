//! The shopping list body.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::list::{ItemState, ShoppingItem};
use crate::ui::editor::{EditField, EditorState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, ITEM_BORDER, MUTED_TEXT, STATUS_OK,
};

pub fn render_list(
    frame: &mut Frame,
    area: Rect,
    items: &[ShoppingItem],
    selected: usize,
    editor: &EditorState,
) {
    let block = Block::default()
        .title(Span::styled(" Shopping List ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ITEM_BORDER));

    if items.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "  Nothing here yet. Press 'a' to add an item.",
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| match (item.state(), editor) {
            (
                ItemState::Editing,
                EditorState::Editing {
                    id,
                    name,
                    quantity,
                    focused,
                },
            ) if *id == item.id => editing_row(name, quantity, *focused),
            _ => viewing_row(item),
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn viewing_row(item: &ShoppingItem) -> ListItem<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![Line::from(vec![
        Span::styled(item.name.clone(), text.add_modifier(Modifier::BOLD)),
        Span::styled("   Qty: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(item.quantity_label(), text),
    ])];
    if item.has_address() {
        lines.push(Line::from(Span::styled(
            format!("  {}", item.address),
            Style::default().fg(STATUS_OK),
        )));
    }
    ListItem::new(lines)
}

fn editing_row(name: &str, quantity: &str, focused: EditField) -> ListItem<'static> {
    let field = |value: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        let cursor = if active { "▏" } else { "" };
        Span::styled(format!("[{}{}]", value, cursor), style)
    };
    ListItem::new(Line::from(vec![
        field(name, focused == EditField::Name),
        Span::raw("  "),
        field(quantity, focused == EditField::Quantity),
        Span::styled("  Enter: Save", Style::default().fg(MUTED_TEXT)),
    ]))
}
