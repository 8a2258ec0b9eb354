use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Paragraph, Row, Table},
    Frame,
};
use studytime_core::format_hours;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress
            Constraint::Min(8),    // Content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_progress(f, app, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(main_chunks[2]);

    draw_record_list(f, app, content_chunks[0]);
    draw_weekly_chart(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[3]);

    let footer_text = match &app.message {
        Some(msg) => msg.clone(),
        None => match app.input_mode {
            InputMode::Normal => {
                "a: Add | g: Goal | d: Delete | j/k: Navigate | q: Quit".to_string()
            }
            _ => "Enter: Submit | Esc: Cancel".to_string(),
        },
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let goal = app
        .dashboard
        .goal_text()
        .unwrap_or_else(|| "No goal set".to_string());
    let header = Paragraph::new(Line::from(vec![
        Span::styled("STUDYTIME", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(goal, Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_progress(f: &mut Frame, app: &App, area: Rect) {
    let progress = &app.dashboard.progress;
    let color = if progress.percent >= 100.0 { Color::Green } else { Color::Cyan };
    let gauge = Gauge::default()
        .block(rounded_block(" This Week "))
        .gauge_style(Style::default().fg(color))
        .ratio((progress.percent / 100.0).clamp(0.0, 1.0))
        .label(progress.text.clone());
    f.render_widget(gauge, area);
}

fn draw_record_list(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app.dashboard.records.iter().map(|r| {
        Row::new(vec![
            Span::styled(r.position.to_string(), Style::default().fg(Color::DarkGray)),
            Span::raw(r.date.format("%Y-%m-%d").to_string()),
            Span::styled(format_hours(r.hours), Style::default().fg(Color::Green)),
            Span::styled(r.subject.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),  // Position
            Constraint::Length(11), // Date
            Constraint::Length(6),  // Hours
            Constraint::Min(10),    // Subject
        ]
    )
    .header(
        Row::new(vec!["#", "Date", "Hours", "Subject"]).style(Style::default().fg(Color::Yellow)),
    )
    .block(rounded_block(" Sessions "))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_weekly_chart(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Hours per Week ");

    if app.chart.bars.is_empty() {
        let empty = Paragraph::new("No sessions yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let bar_items: Vec<Bar> = app.chart.bars.iter().map(|(label, value)| {
        Bar::default()
            .label(label.as_str())
            .value(*value)
            .style(Style::default().fg(Color::Cyan))
            .text_value(format!("{:.1}", *value as f64 / 10.0))
    }).collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(5)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items))
        .max(app.chart.max);

    f.render_widget(chart, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::Normal => " Input ",
        InputMode::AddingRecord => " New session: subject hours:1.5 [date:yesterday] ",
        InputMode::SettingGoal => " Goal: text hours:10 ",
    };
    let style = match app.input_mode {
        InputMode::Normal => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::Yellow),
    };
    let input = Paragraph::new(app.input.as_str())
        .style(style)
        .block(rounded_block(title));
    f.render_widget(input, area);

    if !matches!(app.input_mode, InputMode::Normal) {
        let offset = app.input_before_cursor().width() as u16;
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn rounded_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}
