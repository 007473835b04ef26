use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table as RatatuiTable},
    Frame,
};

use crate::app::App;
use crate::mode::Mode;
use crate::util::display_width;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    if app.store.document().is_empty() {
        render_empty_hint(frame, chunks[0]);
    } else {
        render_table(frame, app, chunks[0]);
    }
    render_status_bar(frame, app, chunks[1]);
    render_message_line(frame, app, chunks[2]);
}

fn render_empty_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("No tables. Copy CSV to the clipboard and press p to paste.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("clipgrid"));
    frame.render_widget(hint, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let document = app.store.document();
    let Some(table) = document.tables.get(app.view.table) else {
        return;
    };
    let col_count = table.col_count();
    if col_count == 0 {
        return;
    }

    let row_num_width = table.row_count().to_string().len().max(3);

    // widest cell per column, capped so one long field cannot eat the screen
    let data_col_widths: Vec<usize> = (0..col_count)
        .map(|col| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|s| display_width(s))
                .max()
                .unwrap_or(3)
                .max(3)
                .min(app.config.max_col_width)
        })
        .collect();

    let mut col_widths: Vec<Constraint> = Vec::with_capacity(col_count + 1);
    col_widths.push(Constraint::Length(row_num_width as u16 + 1));
    for w in &data_col_widths {
        col_widths.push(Constraint::Length(*w as u16 + 2));
    }

    // keep the selected row on screen: simple follow scroll
    let visible_rows = area.height.saturating_sub(2) as usize;
    let first_row = (app.view.row + 1).saturating_sub(visible_rows);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
        .map(|(row_idx, row)| {
            let is_header_row = row_idx == 0;

            let mut cells: Vec<Cell> = Vec::with_capacity(col_count + 1);

            let row_num_style = if row_idx == app.view.row {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            cells.push(Cell::from(format!("{}", row_idx + 1)).style(row_num_style));

            for (col_idx, content) in row.iter().enumerate() {
                let is_cursor = row_idx == app.view.row && col_idx == app.view.col;

                let style = if is_cursor {
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else if is_header_row {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if app.config.zebra && row_idx % 2 == 0 {
                    Style::default().bg(Color::Rgb(32, 32, 40))
                } else {
                    Style::default()
                };

                let display_content = if is_cursor && app.mode == Mode::Edit {
                    format!("{}_", flatten(&app.edit_line.buffer))
                } else {
                    flatten(content)
                };

                cells.push(Cell::from(display_content).style(style));
            }

            Row::new(cells)
        })
        .collect();

    let title = format!("Table {}/{}", app.view.table + 1, document.table_count());
    let widget = RatatuiTable::new(rows, col_widths)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(widget, area);
}

/// Fields may hold embedded newlines; the grid shows them on one line
fn flatten(content: &str) -> String {
    if content.contains('\n') {
        content.replace('\n', "↵")
    } else {
        content.to_string()
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_style = match app.mode {
        Mode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        Mode::Edit => Style::default().bg(Color::Green).fg(Color::Black),
    };

    let dirty_indicator = if app.store.is_dirty() { "[+]" } else { "" };

    let tables = app.store.document().table_count();
    let table_indicator = if tables > 0 {
        format!("Table {}/{}", app.view.table + 1, tables)
    } else {
        "No data".to_string()
    };

    let position = format!("r{},c{} ", app.view.row + 1, app.view.col + 1);

    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", app.mode.display_name()),
            mode_style.add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(table_indicator),
        Span::raw(" "),
        Span::styled(dirty_indicator, Style::default().fg(Color::Red)),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(30)
                .saturating_sub(position.len() as u16) as usize,
        )),
        Span::raw(position),
    ]);

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

fn render_message_line(frame: &mut Frame, app: &App, area: Rect) {
    let content = match &app.message {
        Some(msg) => msg.clone(),
        None => "p paste   e export   Enter edit   Tab next table   q quit".to_string(),
    };
    frame.render_widget(Paragraph::new(content), area);
}
