//! East End - terminal landing page
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - state machine owning the fetch lifecycle
//! - Network Layer (Tokio) - async HTTP execution

mod models;
mod ui;
mod messages;
mod app;
mod network;
mod constants;

use std::io;
use std::time::Duration;
use chrono::Datelike;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use app::AppActor;
use constants::{API_DATA_PATH, APP_NAME, DEFAULT_API_BASE_URL, FEATURES, HERO_SUBTITLE, HERO_TITLE};
use messages::ui_events::key_to_ui_event;
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::NetworkActor;
use ui::{data_card_lines, feature_card};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "east-end.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Optional base URL override as the only argument
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_API_BASE_URL));
    let api_url = format!("{}{}", base_url.trim_end_matches('/'), API_DATA_PATH);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(api_url, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    // Spinner frame counter; presentation-local, never part of app state
    let mut tick = 0usize;

    loop {
        terminal.draw(|f| draw_ui(f, &current_state, tick))?;
        tick = tick.wrapping_add(1);

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header / nav
            Constraint::Length(5),  // Hero
            Constraint::Min(8),     // Live data card
            Constraint::Length(6),  // Features
            Constraint::Length(1),  // Footer
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, main_chunks[0]);
    draw_hero(f, main_chunks[1]);
    draw_data_card(f, state, tick, main_chunks[2]);
    draw_features(f, main_chunks[3]);
    draw_footer(f, main_chunks[4]);
    draw_status_bar(f, state, main_chunks[5]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let nav = Line::from(vec![
        Span::styled(APP_NAME, Style::default().fg(Color::Indexed(99)).bold()),
        Span::raw("    "),
        Span::styled("Home", Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled("About", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Services", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Contact", Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(nav)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_hero(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default().fg(Color::White).bold(),
        ))
        .centered(),
        Line::from(Span::styled(HERO_SUBTITLE, Style::default().fg(Color::Gray))).centered(),
        Line::from(Span::styled(
            "[ Get Started ]",
            Style::default().fg(Color::Indexed(99)).bold(),
        ))
        .centered(),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_data_card(f: &mut Frame, state: &RenderState, tick: usize, area: Rect) {
    let time_text = if state.fetch_time_ms > 0 {
        format!(" {}ms ", state.fetch_time_ms)
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Live Data from API ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_bottom(Line::from(time_text).right_aligned());

    let card = Paragraph::new(data_card_lines(&state.fetch, tick))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(card, area);
}

fn draw_features(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, FEATURES.len() as u32);
            FEATURES.len()
        ])
        .split(area);

    for (chunk, &(icon, title, description)) in columns.iter().zip(FEATURES) {
        f.render_widget(feature_card(icon, title, description), *chunk);
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let year = chrono::Utc::now().year();
    let footer = Paragraph::new(format!(
        "© {} {} Website. Built with Rust, Ratatui, and Tokio.",
        year, APP_NAME
    ))
    .style(Style::default().fg(Color::DarkGray))
    .centered();
    f.render_widget(footer, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.fetch.is_loading() {
        " Fetching /api/data ... "
    } else {
        " ↑/↓:scroll data | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 50, area);

    let help_text = r#"
 EAST END - Keyboard Shortcuts

 NAVIGATION
   ↑ / ↓   or  k / j   Scroll the data card

 GENERAL
   ?                   Toggle this help
   q / Esc / Ctrl+C    Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
