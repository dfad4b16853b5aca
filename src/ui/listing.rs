use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::estimated_minutes;
use crate::models::Quiz;

use super::{format_minutes, render_status};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_search(frame, chunks[1], app);
    render_quizzes(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "EXPLORE QUIZZES",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Pick a quiz and test your knowledge".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(app.search(), Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Search ")
            .title_style(Style::default().fg(Color::Cyan))
            .title_bottom(Line::from(format!(" {} ", app.category().label())).right_aligned())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_quizzes(frame: &mut Frame, area: Rect, app: &App) {
    let quizzes = app.visible_quizzes();

    if quizzes.is_empty() {
        let widget = Paragraph::new(vec![
            Line::from(""),
            Line::from("No quizzes found".fg(Color::Yellow)),
            Line::from("Try adjusting your search or filter".fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(quizzes.len() * 3);
    for (index, quiz) in quizzes.iter().enumerate() {
        lines.extend(quiz_card(quiz, index == app.selected_quiz_index()));
    }

    // Keep the highlighted card on screen; each card is three lines.
    let visible_cards = (area.height / 3).max(1) as usize;
    let first_card = app.selected_quiz_index().saturating_sub(visible_cards - 1);

    let widget = Paragraph::new(lines).scroll(((first_card * 3) as u16, 0));
    frame.render_widget(widget, area);
}

fn quiz_card(quiz: &Quiz, is_selected: bool) -> [Line<'static>; 3] {
    let title_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let marker = if is_selected { ">" } else { " " };

    [
        Line::from(vec![
            Span::styled(format!(" {} ", marker), title_style),
            Span::styled(quiz.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!(
                    "{} questions  ·  {} min  ·  by {}",
                    quiz.question_count(),
                    format_minutes(estimated_minutes(quiz)),
                    quiz.created_by
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(quiz.description.clone(), Style::default().fg(Color::Gray)),
        ]),
    ]
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("type to search  ·  ↑/↓ choose  ·  tab category  ·  enter open  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
