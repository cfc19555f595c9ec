//! Alarm table components
//!
//! Renders the active and acknowledged alarm tables from their GroupTable
//! state, including header sort indicators and the empty-group placeholder.

use super::super::state::DashboardState;
use super::super::table::{COLUMN_COUNT, COLUMN_TITLES, GroupTable, HeaderMark, TableBody, cell_text};
use crate::alarms::AlarmGroup;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Render both alarm tables, active on top.
pub fn render_alarm_tables(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_group(f, chunks[0], state, AlarmGroup::Active);
    render_group(f, chunks[1], state, AlarmGroup::Acknowledged);
}

fn render_group(f: &mut Frame, area: Rect, state: &DashboardState, group: AlarmGroup) {
    let table = state.table(group);
    let focused = state.focused_group() == group;

    let title = match group {
        AlarmGroup::Active => format!(" ACTIVE ALARMS ({}) ", table.records().len()),
        AlarmGroup::Acknowledged => {
            format!(" ACKNOWLEDGED ALARMS ({}) ", table.records().len())
        }
    };
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    match table.body() {
        TableBody::Placeholder(text) => {
            let placeholder = Paragraph::new(format!("\n{}", text))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
        }
        TableBody::Rows(records) => {
            let header = Row::new(header_cells(table, focused, state.selected_column()))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .height(1);

            let rows: Vec<Row> = records
                .iter()
                .map(|record| {
                    let cells: Vec<Cell> = (0..COLUMN_COUNT)
                        .map(|column| {
                            let text = cell_text(record, column);
                            let style = match column {
                                0 | 3 => record.severity.style(),
                                7 => record.current_severity.style(),
                                _ => Style::default().fg(Color::Gray),
                            };
                            Cell::from(Span::styled(text, style))
                        })
                        .collect();
                    Row::new(cells).height(1)
                })
                .collect();

            let widget = Table::new(rows, column_widths())
                .header(header)
                .block(block)
                .column_spacing(1);
            f.render_widget(widget, area);
        }
    }
}

fn header_cells(table: &GroupTable, focused: bool, selected: usize) -> Vec<Cell<'static>> {
    (0..COLUMN_COUNT)
        .map(|column| {
            let indicator = match table.mark(column) {
                HeaderMark::Sorted => " ▲",
                HeaderMark::SortedReverse => " ▼",
                HeaderMark::Unsorted => "",
            };
            let style = if focused && column == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Cell::from(Span::styled(
                format!("{}{}", COLUMN_TITLES[column], indicator),
                style,
            ))
        })
        .collect()
}

fn column_widths() -> [Constraint; COLUMN_COUNT] {
    [
        Constraint::Length(3),      // severity marker
        Constraint::Percentage(10), // PV
        Constraint::Percentage(16), // Description
        Constraint::Length(16),     // Severity
        Constraint::Percentage(12), // Message
        Constraint::Length(23),     // Time
        Constraint::Percentage(8),  // Value
        Constraint::Length(16),     // Current Severity
        Constraint::Percentage(12), // Current Message
    ]
}
