//! Terminal view: the bounded circle, trail, and current position marker.
//!
//! Pulls a render snapshot from the tracker each tick and draws it on a
//! ratatui canvas. All domain logic lives in the library; this module only
//! turns pixel coordinates into shapes.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::{DefaultTerminal, Frame};

use trailscope::geometry::Geometry;
use trailscope::tracker::{PositionTracker, ViewSnapshot};

use crate::error::CliError;

/// Render tick interval (~30 fps).
const TICK: Duration = Duration::from_millis(33);

/// Run the view loop until the user quits (q, Esc, or Ctrl-C).
pub fn run(tracker: PositionTracker, geometry: Geometry, diameter: f64) -> Result<(), CliError> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &tracker, &geometry, diameter);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    tracker: &PositionTracker,
    geometry: &Geometry,
    diameter: f64,
) -> Result<(), CliError> {
    loop {
        let snapshot = tracker.render_snapshot(geometry, Instant::now());
        terminal
            .draw(|frame| draw(frame, &snapshot, diameter))
            .map_err(CliError::Terminal)?;

        if event::poll(TICK).map_err(CliError::Terminal)? {
            if let Event::Key(key) = event::read().map_err(CliError::Terminal)? {
                if key.kind == KeyEventKind::Press && is_quit(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

fn draw(frame: &mut Frame, snapshot: &ViewSnapshot, diameter: f64) {
    let title = match (snapshot.connected, &snapshot.current) {
        (true, Some(current)) => format!(" trailscope | connected | w {:.1} ", current.weight),
        (true, None) => " trailscope | connected ".to_string(),
        (false, _) => " trailscope | disconnected ".to_string(),
    };
    let border_color = if snapshot.connected {
        Color::Green
    } else {
        Color::Red
    };

    let radius = diameter / 2.0;
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_color)
                .title(title),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, diameter])
        .y_bounds([0.0, diameter])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: radius,
                y: radius,
                radius,
                color: Color::DarkGray,
            });

            // Pixel y grows downward; the canvas axis grows upward
            for point in &snapshot.trail {
                let level = (point.opacity * 255.0) as u8;
                if level == 0 {
                    continue;
                }
                ctx.draw(&Points {
                    coords: &[(point.x, diameter - point.y)],
                    color: Color::Rgb(level, level, level),
                });
            }

            if let Some(current) = &snapshot.current {
                ctx.draw(&Circle {
                    x: current.x,
                    y: diameter - current.y,
                    radius: diameter / 60.0,
                    color: Color::Cyan,
                });
            }
        });

    frame.render_widget(canvas, frame.area());
}
