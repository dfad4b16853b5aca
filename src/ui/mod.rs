mod intro;
mod listing;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Listing => listing::render(frame, area, app),
        Screen::Intro => intro::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Result => result::render(frame, area, app),
    }
}

/// Format a minute estimate the way quiz cards show it: `~5`, `~7.5`.
fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("~{:.0}", minutes)
    } else {
        format!("~{:.1}", minutes)
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = app.status() {
        let widget = ratatui::widgets::Paragraph::new(status)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}
