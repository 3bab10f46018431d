//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::core::breathing::{BreathingSequencer, Phase};
use crate::core::duration::format_clock;
use crate::core::session::Mode;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if let Some(sequencer) = &app.breathing {
        render_breathing_overlay(frame, sequencer);
    }
}

/// Render the standalone breathing screen.
pub fn render_breathing_screen(frame: &mut Frame<'_>, sequencer: &BreathingSequencer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Hint
        ])
        .split(frame.area());

    let header = Paragraph::new(" stillgrove - Guided Breathing ")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, chunks[0]);

    render_breathing_body(frame, sequencer, chunks[1]);

    let hint = Paragraph::new(" Esc to finish early").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(" stillgrove - {} ", app.timer.mode());

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(mode_color(app.timer.mode()))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(mode_color(app.timer.mode()))),
        );

    frame.render_widget(header, area);
}

/// Render the timer body: mode tabs, clock, progress, session dots, hints.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 9])
        .split(centered);

    frame.render_widget(mode_tabs(app), rows[0]);

    let clock = Paragraph::new(app.timer.format_remaining())
        .style(
            Style::default()
                .fg(mode_color(app.timer.mode()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(clock, rows[2]);

    let run_state = if app.timer.is_running() {
        "running"
    } else {
        "paused"
    };
    let gauge = Gauge::default()
        .ratio(app.timer.progress())
        .label(run_state)
        .gauge_style(Style::default().fg(mode_color(app.timer.mode())))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, inset_horizontal(rows[4], 48));

    frame.render_widget(session_dots(app), rows[6]);

    let hints = Paragraph::new("space start/pause   r reset   1/2/3 mode   b breathe   q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, rows[8]);
}

/// Build the mode selector line.
fn mode_tabs(app: &App) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for mode in [Mode::Focus, Mode::ShortBreak, Mode::LongBreak] {
        let label = format!("  {mode}  ");
        let style = if mode == app.timer.mode() {
            Style::default()
                .fg(Color::Black)
                .bg(mode_color(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Build the session-cadence dots (one per focus session until a long break).
fn session_dots(app: &App) -> Paragraph<'static> {
    let cadence = app.timer.long_break_every();
    let filled = app.timer.sessions_completed() % cadence;

    let mut spans = vec![Span::styled(
        format!("Sessions: {}  ", app.timer.sessions_completed()),
        Style::default().fg(Color::DarkGray),
    )];
    for i in 0..cadence {
        let (dot, style) = if i < filled {
            ("●", Style::default().fg(mode_color(app.timer.mode())))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(dot, style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status = app.status.as_deref().unwrap_or("");
    let bar =
        Paragraph::new(format!(" {status}")).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// Render the breathing overlay as a popup over the timer.
fn render_breathing_overlay(frame: &mut Frame<'_>, sequencer: &BreathingSequencer) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Guided Breathing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_breathing_body(frame, sequencer, inner);
}

/// Render the shared breathing content: phase, progress, cycle, countdown.
fn render_breathing_body(frame: &mut Frame<'_>, sequencer: &BreathingSequencer, area: Rect) {
    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 7])
        .split(centered);

    let phase = sequencer.phase();
    let phase_line = Paragraph::new(phase.display_name())
        .style(
            Style::default()
                .fg(phase_color(phase))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(phase_line, rows[0]);

    let gauge = Gauge::default()
        .ratio(sequencer.phase_progress())
        .label(format!("{}s", sequencer.phase_remaining()))
        .gauge_style(Style::default().fg(phase_color(phase)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, inset_horizontal(rows[2], 32));

    let cycle = Paragraph::new(format!("Cycle {}", sequencer.cycle_count() + 1))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(cycle, rows[4]);

    let countdown = if sequencer.is_winding_down() {
        "Settling...".to_string()
    } else {
        format!("Time remaining  {}", format_clock(sequencer.remaining_seconds()))
    };
    let countdown_line = Paragraph::new(countdown)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(countdown_line, rows[6]);
}

/// Color accent per timer mode.
const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::Green,
        Mode::ShortBreak => Color::Cyan,
        Mode::LongBreak => Color::Blue,
    }
}

/// Color accent per breathing phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Inhale => Color::Green,
        Phase::Hold => Color::Yellow,
        Phase::Exhale => Color::Cyan,
        Phase::Rest => Color::DarkGray,
    }
}

/// Center a rect of the given percentage size within `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area)[1];

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical)[1]
}

/// Shrink a row to at most `max_width` columns, centered.
fn inset_horizontal(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect {
        x,
        width,
        ..area
    }
}
