use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::{format_minutes, render_status};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(quiz) = app.current_quiz() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let facts = [
        (quiz.question_count().to_string(), "Questions"),
        (format_minutes(app.estimated_minutes()), "Minutes estimated time"),
        ("1".to_string(), "Attempt allowed"),
    ];

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.title.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(quiz.description.as_str().fg(Color::Gray)),
        Line::from(""),
        Line::from("About this quiz".bold()),
    ];
    for (value, label) in facts {
        content.push(Line::from(vec![
            Span::styled(format!("{:>5}  ", value), Style::default().fg(Color::Magenta).bold()),
            Span::styled(label, Style::default().fg(Color::Gray)),
        ]));
    }
    content.extend([
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start  ·  esc back".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(2)),
        );

    frame.render_widget(widget, chunks[1]);
    render_status(frame, chunks[2], app);
}
