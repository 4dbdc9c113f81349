/// Drawing of the window with ratatui
///
/// Layout, top to bottom: the input field with its "Add Thought" button, then
/// the list of date headers and thoughts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::storage::ThoughtStorage;
use crate::view::Row;
use crate::window::{Focus, Window};

pub const TITLE: &str = " Mind Dump ";
pub const PLACEHOLDER: &str = "Enter your distracting thought...";
pub const BUTTON_LABEL: &str = "Add Thought";

const HEADER_COLOR: Color = Color::Blue;
const FOCUS_COLOR: Color = Color::Yellow;

pub fn draw<S: ThoughtStorage>(frame: &mut Frame, window: &mut Window<'_, S>) {
    let outer = Block::default().borders(Borders::ALL).title(TITLE);
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);
    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_LABEL.len() as u16 + 4)])
        .split(rows[0]);

    draw_input(frame, window, input_row[0]);
    draw_button(frame, window.focus, input_row[1]);
    draw_list(frame, window, rows[1]);
}

fn focus_block(focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };
    Block::default().borders(Borders::ALL).border_style(style)
}

fn draw_input<S: ThoughtStorage>(frame: &mut Frame, window: &Window<'_, S>, area: Rect) {
    let focused = window.focus == Focus::Input;
    let line = if window.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(window.input.as_str())
    };

    // Keep the end of long input visible
    let text_width = area.width.saturating_sub(2);
    let typed_width = Line::from(window.input.as_str()).width() as u16;
    let scroll = typed_width.saturating_sub(text_width.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(line).block(focus_block(focused)).scroll((0, scroll)),
        area,
    );

    if focused {
        frame.set_cursor_position((area.x + 1 + typed_width - scroll, area.y + 1));
    }
}

fn draw_button(frame: &mut Frame, focus: Focus, area: Rect) {
    let focused = focus == Focus::Button;
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    frame.render_widget(
        Paragraph::new(Span::styled(BUTTON_LABEL, style))
            .alignment(Alignment::Center)
            .block(focus_block(focused)),
        area,
    );
}

fn row_item(row: &Row) -> ListItem<'static> {
    let style = match row {
        Row::Header(_) => Style::default().fg(HEADER_COLOR),
        Row::Entry(_) => Style::default(),
    };
    ListItem::new(row.label()).style(style)
}

fn draw_list<S: ThoughtStorage>(frame: &mut Frame, window: &mut Window<'_, S>, area: Rect) {
    let focused = window.focus == Focus::List;
    let items: Vec<ListItem> = window.rows.iter().map(row_item).collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(focus_block(focused))
        .highlight_style(highlight);

    frame.render_stateful_widget(list, area, &mut window.list_state);
}
