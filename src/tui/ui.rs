// src/tui/ui.rs

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table, Tabs},
    Frame, Terminal,
};
use thiserror::Error;
use tracing::{debug, info};

use super::app::{App, Screen};
use crate::stat::{
    category_shares, change_tone, format_axis_thousands, format_currency, share_label,
    trend_indicator, ActivityStatus, Emphasis, Period, RiskLevel, Tone, STAT_CARDS,
};

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),
}

/// Entry point for the TUI. Called from main.rs.
pub fn run_tui(mut app: App, tick_rate: Duration) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!(period = %app.state.current_period(), "dashboard started");

    let result = event_loop(&mut terminal, &mut app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("dashboard closed");

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), TuiError> {
    loop {
        app.tick();
        terminal.draw(|f| ui(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(app, key);
            }
        }
    }
}

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) {
    use KeyCode::*;

    if key.kind != KeyEventKind::Press {
        return;
    }
    debug!(code = ?key.code, "key");

    match key.code {
        // Quit
        Char('q') => app.should_quit = true,

        // Screen switch
        Tab => app.next_screen(),
        BackTab => app.prev_screen(),

        // Period selector
        Left => app.prev_period(),
        Right => app.next_period(),
        Char('d') | Char('1') => app.select_period(Period::Daily),
        Char('w') | Char('2') => app.select_period(Period::Weekly),
        Char('m') | Char('3') => app.select_period(Period::Monthly),
        Char('y') | Char('4') => app.select_period(Period::Yearly),

        // Category cursor
        Up => app.cursor_up(),
        Down => app.cursor_down(),
        Enter | Char(' ') => {
            if app.current_screen == Screen::Dashboard {
                app.click_focused_category();
            }
        }

        // Alert banner
        Char('x') | Esc => app.state.dismiss_alert(),

        Char('?') => app.current_screen = Screen::Help,

        _ => {}
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
    }
}

/// Top-level layout: header, optional alert, main content, footer.
pub(crate) fn ui(f: &mut Frame<'_>, app: &App) {
    let alert_height = if app.state.alert().is_visible() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),            // header
            Constraint::Length(alert_height), // alert banner
            Constraint::Min(0),               // main
            Constraint::Length(3),            // footer
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    if let Some(message) = app.state.alert().message() {
        draw_alert(f, chunks[1], message);
    }

    match app.current_screen {
        Screen::Dashboard => draw_dashboard(f, chunks[2], app),
        Screen::Activity => draw_activity(f, chunks[2], app),
        Screen::Help => draw_help(f, chunks[2]),
    }

    let footer = Paragraph::new(
        "Tab: screen  |  ←/→ or d/w/m/y: period  |  ↑/↓: category  |  Enter: select  |  x: dismiss alert  |  ?: help  |  q: quit",
    )
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[3]);
}

fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let titles: Vec<&str> = Period::ALL.iter().map(|p| p.label()).collect();
    let tabs = Tabs::new(titles)
        .select(app.state.current_period().index())
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(format!(
                    "Spending Analytics - {}",
                    app.current_screen.title()
                ))
                .borders(Borders::ALL),
        );
    f.render_widget(tabs, area);
}

fn draw_alert(f: &mut Frame<'_>, area: Rect, message: &str) {
    let warn = Style::default().fg(Color::Yellow);
    let line = Line::from(vec![
        Span::styled("⚠ ", warn.add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), warn),
        Span::raw("   [x] dismiss"),
    ]);
    let p = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(warn),
    );
    f.render_widget(p, area);
}

// Dashboard screen: stat cards on top, trend and category panels below.
fn draw_dashboard(f: &mut Frame<'_>, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    draw_stat_cards(f, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    draw_spending(f, cols[0], app);
    draw_categories(f, cols[1], app);
}

fn draw_stat_cards(f: &mut Frame<'_>, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, col) in STAT_CARDS.iter().zip(cols.iter()) {
        let tone = change_tone(card.change);
        let glyph = match tone {
            Tone::Positive => "↑",
            Tone::Negative => "↓",
        };
        let lines = vec![
            Line::from(Span::styled(
                card.value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{glyph} {}", card.change),
                Style::default().fg(tone_color(tone)),
            )),
        ];
        let p = Paragraph::new(lines).block(
            Block::default()
                .title(card.title)
                .borders(Borders::ALL),
        );
        f.render_widget(p, *col);
    }
}

fn draw_spending(f: &mut Frame<'_>, area: Rect, app: &App) {
    let spending = app.state.view().spending;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(spending.len() as u16 + 3),
        ])
        .split(area);

    let points: Vec<(f64, f64)> = spending
        .iter()
        .map(|p| (f64::from(p.sequence_index), p.amount))
        .collect();
    let max_amount = spending.iter().map(|p| p.amount).fold(0.0, f64::max);
    let y_top = (max_amount * 1.1).max(1.0);
    let x_right = (spending.len() as f64).max(2.0);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&points),
        Dataset::default()
            .name(app.state.current_period().label())
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
    ];

    let x_labels: Vec<Span> = spending.iter().map(|p| Span::raw(p.label)).collect();
    let y_labels: Vec<Span> = [0.0, y_top / 2.0, y_top]
        .iter()
        .map(|v| Span::raw(format_axis_thousands(*v)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Spending Trends")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([1.0, x_right])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_top])
                .labels(y_labels),
        );
    f.render_widget(chart, chunks[0]);

    let rows = spending.iter().map(|p| {
        let trend = trend_indicator(p.trend_percent);
        Row::new(vec![
            Span::raw(p.label),
            Span::raw(format_currency(p.amount)),
            Span::styled(trend.display(), Style::default().fg(tone_color(trend.tone))),
        ])
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Period", "Amount", "Trend"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, chunks[1]);
}

// Category panel: risk legend, one row per category, selection details.
fn draw_categories(f: &mut Frame<'_>, area: Rect, app: &App) {
    let categories = app.state.view().categories;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(categories.len() as u16 + 4),
            Constraint::Min(0),
        ])
        .split(area);

    let shares = category_shares(categories);
    let rows = categories
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(idx, (entry, share))| {
            let mut style = Style::default().fg(risk_color(entry.risk));
            if app.state.emphasis_of(entry.name) == Emphasis::Dimmed {
                style = style.add_modifier(Modifier::DIM);
            }
            if idx == app.category_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Row::new(vec![
                share_label(entry.name, share),
                format_currency(entry.amount),
                entry.risk.label().to_string(),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let legend = Line::from(vec![
        Span::styled("● Low Risk ", Style::default().fg(risk_color(RiskLevel::Low))),
        Span::styled(
            "● Medium Risk ",
            Style::default().fg(risk_color(RiskLevel::Medium)),
        ),
        Span::styled("● High Risk", Style::default().fg(risk_color(RiskLevel::High))),
    ]);

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Category", "Amount", "Risk"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title("Category Distribution")
                .title_bottom(legend)
                .borders(Borders::ALL),
        );
    f.render_widget(table, chunks[0]);

    let details: Vec<Line> = match (app.state.selection(), app.state.selected_category()) {
        (_, Some(entry)) => vec![
            Line::from(Span::styled(
                entry.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format_currency(entry.amount)),
            Line::from(Span::styled(
                entry.risk.label(),
                Style::default().fg(risk_color(entry.risk)),
            )),
        ],
        (Some(stale), None) => vec![Line::from(format!(
            "`{stale}` is not part of the {} breakdown",
            app.state.current_period()
        ))],
        (None, None) => vec![Line::from("No category selected. Enter highlights one.")],
    };
    let p = Paragraph::new(details).block(
        Block::default()
            .title("Selection")
            .borders(Borders::ALL),
    );
    f.render_widget(p, chunks[1]);
}

// Activity screen, the latest transactions.
fn draw_activity(f: &mut Frame<'_>, area: Rect, app: &App) {
    let rows = app.activity.iter().map(|rec| {
        let status_style = match rec.status {
            ActivityStatus::Completed => Style::default().fg(Color::Green),
            ActivityStatus::Pending => Style::default().fg(Color::Yellow),
        };
        Row::new(vec![
            Span::raw(rec.date.to_string()),
            Span::raw(rec.description),
            Span::raw(rec.amount),
            Span::styled(rec.status.label(), status_style),
        ])
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(20),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Date", "Transaction", "Amount", "Status"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title("Recent Activity")
                .borders(Borders::ALL),
        );
    f.render_widget(table, area);
}

//  Help screen
fn draw_help(f: &mut Frame<'_>, area: Rect) {
    let text = "\
Screens:
  Dashboard       – stat cards, spending trend and category distribution
  Recent Activity – latest transactions
  Help            – this page

Key bindings:
  Tab / Shift+Tab : switch screen
  ← / →           : previous / next period
  d w m y (1-4)   : daily / weekly / monthly / yearly
  ↑ / ↓           : move category cursor
  Enter / Space   : highlight category (again to clear)
  x / Esc         : dismiss alert
  ?               : open this help
  q               : quit
";

    let block = Block::default()
        .title(Span::raw("Help"))
        .borders(Borders::ALL);
    let p = Paragraph::new(text).block(block);
    f.render_widget(p, area);
}
