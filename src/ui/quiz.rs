use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::render_status;

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], app);
    render_question_text(frame, chunks[2], &question.text);
    render_options(frame, chunks[3], &question.options, app);
    render_status(frame, chunks[4], app);
    render_controls(frame, chunks[5], app);
}

fn render_progress(frame: &mut Frame, text_area: Rect, gauge_area: Rect, app: &App) {
    let percent = app.progress_percent();
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(text_area);

    let position = Paragraph::new(format!(
        "Question {} of {}",
        app.current_question_number(),
        app.total_questions()
    ))
    .fg(Color::Gray);
    let complete = Paragraph::new(format!("{:.0}% Complete", percent.round()))
        .alignment(Alignment::Right)
        .fg(Color::Magenta);
    frame.render_widget(position, halves[0]);
    frame.render_widget(complete, halves[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, gauge_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], app: &App) {
    let recorded = app.recorded_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_cursor = index == app.cursor();
        let is_chosen = recorded == Some(index);

        let style = match (is_chosen, is_cursor) {
            (true, _) => Style::default().fg(Color::Magenta).bold(),
            (false, true) => Style::default().fg(Color::Cyan).bold(),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_cursor { ">" } else { " " };
        let check = if is_chosen { " ✓" } else { "" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
            Span::styled(check, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let next = if app.is_last_question() {
        "n finish quiz"
    } else {
        "n next"
    };
    let widget = Paragraph::new(format!(
        "j/k move  ·  enter select  ·  p previous  ·  {}  ·  esc quit",
        next
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
