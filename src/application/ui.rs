use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Alert;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

const HEADER: &str = "Chat with OpsInsight Assistant!";

fn insert_text(textarea: &mut tui_textarea::TextArea<'_>, text: &str) {
    for char in text.chars() {
        if char == '\n' {
            textarea.insert_newline();
        } else if char != '\r' {
            textarea.insert_char(char);
        }
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        insert_text(
            &mut textarea,
            "The checkout service is returning 502s since the last deploy. What should I check first?",
        );
        app_state.set_pending_text(&textarea.lines().join("\n"));
    }

    loop {
        textarea.set_block(TextArea::block(app_state.can_send()));

        terminal.draw(|frame| {
            let mut attachment_height = 0;
            if app_state.pending_attachment.is_some() {
                attachment_height = 1;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(attachment_height),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            frame.render_widget(
                Paragraph::new(HEADER)
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                layout[0],
            );

            if layout[1].width != app_state.last_known_width
                || layout[1].height != app_state.last_known_height
            {
                app_state.set_rect(layout[1]);
            }

            app_state
                .bubble_list
                .render(frame, layout[1], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[1].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if let Some(attachment) = &app_state.pending_attachment {
                frame.render_widget(
                    Paragraph::new(format!("📎 {}", attachment.file_name))
                        .style(Style::default().fg(Color::Magenta)),
                    layout[2],
                );
            }

            if app_state.in_flight {
                loading.render(frame, layout[3]);
            } else {
                frame.render_widget(textarea.widget(), layout[3]);
            }

            if let Some(text) = &app_state.alert {
                let screen = frame.size();
                Alert::new(text).render(frame, screen);
            }
        })?;

        match events.next().await? {
            Event::AssistantResponse(res) => {
                app_state.complete_send(res);
                if app_state.pending_text.is_empty() {
                    textarea = TextArea::default();
                }
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEsc() => {
                app_state.dismiss_alert();
            }
            Event::KeyboardEnter() => {
                if app_state.alert.is_some() {
                    app_state.dismiss_alert();
                    continue;
                }

                if app_state.in_flight {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                let (should_break, handled) = app_state.handle_slash_commands(&input_str).await;
                if should_break {
                    break;
                }
                if handled {
                    textarea = TextArea::default();
                    app_state.set_pending_text("");
                    continue;
                }

                if !app_state.can_send() {
                    continue;
                }

                if let Some(request) = app_state.begin_send() {
                    tx.send(Action::SendRequest(request))?;
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.accepts_input() {
                    textarea.input(input);
                    app_state.set_pending_text(&textarea.lines().join("\n"));
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.accepts_input() {
                    insert_text(&mut textarea, &text);
                    app_state.set_pending_text(&textarea.lines().join("\n"));
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                continue;
            }
        }
    }

    return Ok(());
}

/// Best effort terminal restore. Runs inside the panic hook, so failures are
/// ignored rather than raised.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::default();
    let attach_path = Config::get(ConfigKey::Attach);
    if !attach_path.is_empty() {
        app_state.attach(&attach_path).await;
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
