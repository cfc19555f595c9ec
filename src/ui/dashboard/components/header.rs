//! Dashboard header component
//!
//! Renders the title and the status line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the title bar and the "Last update" / failure status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "ALARM MONITOR v{} | {} | {} | every {}s",
        version, state.environment, state.server_url, state.refresh_secs
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22),
            Constraint::Fill(1),
            Constraint::Length(22),
        ])
        .split(header_chunks[1]);

    // Uptime in Days, Hours, Minutes
    let uptime = state.start_time.elapsed();
    let uptime_text = format!(
        "UPTIME {}d {}h {}m",
        uptime.as_secs() / 86400,
        (uptime.as_secs() % 86400) / 3600,
        (uptime.as_secs() % 3600) / 60
    );
    let uptime_widget = Paragraph::new(uptime_text)
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(uptime_widget, status_chunks[0]);

    // Failed refreshes borrow the UNDEFINED severity color, like the web
    // status bar did.
    let status = state.status();
    let status_style = if status.error {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let status_line = Paragraph::new(status.text.clone())
        .alignment(Alignment::Center)
        .style(status_style)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_line, status_chunks[1]);

    // Slow pulse so a frozen screen is distinguishable from a quiet one.
    let live_marker = if state.tick % 10 < 5 { "●" } else { "○" };
    let live_widget = Paragraph::new(format!("{} LIVE", live_marker))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(live_widget, status_chunks[2]);
}
