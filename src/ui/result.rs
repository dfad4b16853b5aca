use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::{QuestionReview, Review};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(review) = app.review() else {
        return;
    };
    let color = score_color(review.percentage);

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], &review, color);
    render_score_gauge(frame, chunks[1], &review, color);
    render_question_breakdown(frame, chunks[2], &review, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn score_color(percentage: u32) -> Color {
    match percentage {
        75.. => Color::Green,
        60..=74 => Color::Magenta,
        40..=59 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, review: &Review, color: Color) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(review.title.as_str().fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", review.score, review.total),
            Style::default().fg(color).bold(),
        )),
        Line::from(review.grade.message().fg(Color::White)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_score_gauge(frame: &mut Frame, area: Rect, review: &Review, color: Color) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(review.percentage.min(100) as u16)
        .label(format!("{}%", review.percentage));
    frame.render_widget(gauge, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, review: &Review, scroll: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(review.questions.len() * 3);
    for question in &review.questions {
        lines.extend(question_lines(question));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .title(" Review Your Answers ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn question_lines(question: &QuestionReview) -> Vec<Line<'static>> {
    let (verdict, color) = if question.is_correct {
        ("Correct", Color::Green)
    } else {
        ("Incorrect", Color::Red)
    };

    let your_answer = question
        .selected
        .and_then(|i| question.options.get(i))
        .cloned()
        .unwrap_or_else(|| "(no answer)".to_string());
    let correct_answer = question
        .options
        .get(question.correct)
        .cloned()
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:2}. ", question.index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(truncate_question(&question.text), Style::default().fg(Color::White)),
            Span::styled(format!("  {}", verdict), Style::default().fg(color).bold()),
        ]),
        Line::from(vec![
            Span::styled("    your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(your_answer, Style::default().fg(color)),
        ]),
    ];
    if !question.is_correct {
        lines.push(Line::from(vec![
            Span::styled("    correct:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(correct_answer, Style::default().fg(Color::Green)),
        ]));
    }
    lines
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r try again  ·  e explore more  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
