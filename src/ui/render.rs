use ratatui::Frame;

use crate::ui::add_dialog::render_add_dialog;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list_view::render_list;
use crate::ui::map_picker::render_map_picker;
use crate::ui::permission::render_permission_prompt;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.store().len(), app.permission().status()),
        header,
    );
    render_list(
        frame,
        body,
        app.store().items(),
        app.selected(),
        app.editor(),
    );
    let footer_widget = Footer::new();
    frame.render_widget(
        footer_widget.widget(footer, app.focus(), app.notice()),
        footer,
    );

    // Dialogs stack: add dialog, then the map or the permission prompt on top.
    render_add_dialog(frame, app.add_dialog());
    render_map_picker(frame, app.map_picker());
    render_permission_prompt(frame, app.permission_prompt());
}
