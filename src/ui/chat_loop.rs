//! Full-screen interactive loop: transcript on top, input line below.
//!
//! Key map: Enter sends, digits 1-9 press the latest reply's buttons (when
//! the input is empty), Esc cancels a streaming reply, Ctrl+T cycles themes,
//! Ctrl+P swaps persona, Ctrl+R swaps role, Ctrl+G starts the deployment
//! guide, Ctrl+K generates a mock key pair, Ctrl+C exits.

use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tokio_util::sync::CancellationToken;
use tracing::info;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::api::ApiMessage;
use crate::core::chat_stream::{ChatStreamService, EventReceiver, StreamEvent, StreamParams};
use crate::core::config::Config;
use crate::core::keys::KeyPair;
use crate::core::learning::UserRole;
use crate::core::message::{topic_selection, Sender};
use crate::core::persona::{system_prompt, Persona};
use crate::core::session::{Session, START_DEPLOYMENT_GUIDE};
use crate::ui::content::ButtonDirective;
use crate::ui::render::render_message;
use crate::ui::theme::Theme;

pub struct ChatOptions {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub syntax_enabled: bool,
}

struct ActiveStream {
    reply_index: usize,
    stream_id: u64,
    cancel: CancellationToken,
}

struct ChatApp {
    session: Session,
    config: Config,
    theme: Theme,
    persona: Persona,
    role: UserRole,
    input: String,
    scroll_from_bottom: u16,
    stream: ChatStreamService,
    events: EventReceiver,
    active: Option<ActiveStream>,
    next_stream_id: u64,
    opts: ChatOptions,
    latest_buttons: Vec<ButtonDirective>,
    hidden_trigger: Option<String>,
    quit: bool,
}

/// Run the interactive session until the user exits.
pub async fn run_chat(
    stream: ChatStreamService,
    events: EventReceiver,
    config: Config,
    opts: ChatOptions,
) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ChatApp::new(stream, events, config, opts);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

impl ChatApp {
    fn new(
        stream: ChatStreamService,
        events: EventReceiver,
        config: Config,
        opts: ChatOptions,
    ) -> Self {
        let theme = config
            .theme
            .as_deref()
            .and_then(Theme::find)
            .unwrap_or_default();
        let persona = config.persona_or_default();
        let role = config.role_or_default();
        let mut app = ChatApp {
            session: Session::new(),
            config,
            theme,
            persona,
            role,
            input: String::new(),
            scroll_from_bottom: 0,
            stream,
            events,
            active: None,
            next_stream_id: 1,
            opts,
            latest_buttons: Vec::new(),
            hidden_trigger: None,
            quit: false,
        };
        app.push_welcome();
        app
    }

    async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), Box<dyn Error>> {
        while !self.quit {
            self.drain_stream_events();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.on_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Locally authored greeting listing the learning path as buttons; never
    /// sent to the API.
    fn push_welcome(&mut self) {
        let mut content = String::from(
            "Welcome to the Zama FHEVM Tutor! Pick a topic below with its number key, or type a question.\n",
        );
        for section in self.role.learning_path() {
            content.push_str(&format!("**{}**\n", section.title));
            for topic in section.topics {
                content.push_str(&format!(
                    "[BUTTON:{}|{}]\n",
                    topic.title,
                    topic_selection(topic.prompt)
                ));
            }
        }
        self.session.clear();
        let index = self.session.open_reply();
        self.session.append_chunk(index, &content);
    }

    fn drain_stream_events(&mut self) {
        while let Ok((stream_event, stream_id)) = self.events.try_recv() {
            let Some(active) = &self.active else {
                continue;
            };
            if active.stream_id != stream_id {
                // Straggler from a cancelled stream.
                continue;
            }
            let reply_index = active.reply_index;
            match stream_event {
                StreamEvent::Chunk(chunk) => {
                    self.session.append_chunk(reply_index, &chunk);
                    self.scroll_from_bottom = 0;
                }
                StreamEvent::Error(message) => {
                    self.session.fail_reply(
                        reply_index,
                        format!("Sorry, I ran into a problem: {message}"),
                    );
                }
                StreamEvent::End => {
                    if self.session.finish_reply(reply_index) {
                        info!("switched into deployment guide mode");
                    }
                    self.active = None;
                }
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) => self.quit = true,
            (KeyCode::Char('t'), true) => self.cycle_theme(),
            (KeyCode::Char('p'), true) => self.swap_persona(),
            (KeyCode::Char('r'), true) => self.swap_role(),
            (KeyCode::Char('g'), true) => self.start_deployment_guide(),
            (KeyCode::Char('k'), true) => self.generate_keys(),
            (KeyCode::Esc, _) => self.cancel_stream(),
            (KeyCode::Enter, _) => self.submit_input(),
            (KeyCode::Backspace, _) => self.pop_grapheme(),
            (KeyCode::Up, _) => self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(1),
            (KeyCode::Down, _) => {
                self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(1)
            }
            (KeyCode::PageUp, _) => {
                self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(10)
            }
            (KeyCode::PageDown, _) => {
                self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(10)
            }
            (KeyCode::Char(c), false) => {
                if self.input.is_empty() && c.is_ascii_digit() {
                    if self.press_button(c) {
                        return;
                    }
                }
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn pop_grapheme(&mut self) {
        if let Some((offset, _)) = self.input.grapheme_indices(true).next_back() {
            self.input.truncate(offset);
        }
    }

    fn press_button(&mut self, digit: char) -> bool {
        let Some(index) = digit.to_digit(10).and_then(|d| d.checked_sub(1)) else {
            return false;
        };
        let Some(button) = self.latest_buttons.get(index as usize).cloned() else {
            return false;
        };
        self.send(button.payload, true);
        true
    }

    fn submit_input(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.active.is_some() {
            return;
        }
        self.input.clear();
        self.send(text, true);
    }

    fn send(&mut self, text: String, visible_user: bool) {
        if self.active.is_some() {
            return;
        }
        let reply_index = if visible_user {
            self.session.push_exchange(text)
        } else {
            let index = self.session.open_reply();
            // The hidden trigger still reaches the model, just not the view.
            self.hidden_trigger = Some(text);
            index
        };
        self.spawn_request(reply_index);
        self.scroll_from_bottom = 0;
    }

    fn spawn_request(&mut self, reply_index: usize) {
        let mut messages = vec![ApiMessage::system(system_prompt(self.persona, self.role))];
        messages.extend(self.session.api_history(reply_index));
        if let Some(trigger) = self.hidden_trigger.take() {
            messages.push(ApiMessage {
                role: "user".to_string(),
                content: trigger,
            });
        }
        let stream_id = self.next_stream_id;
        self.next_stream_id += 1;
        let cancel = CancellationToken::new();
        self.stream.spawn_stream(StreamParams {
            base_url: self.opts.base_url.clone(),
            api_key: self.opts.api_key.clone(),
            model: self.opts.model.clone(),
            messages,
            cancel_token: cancel.clone(),
            stream_id,
        });
        self.active = Some(ActiveStream {
            reply_index,
            stream_id,
            cancel,
        });
    }

    fn cancel_stream(&mut self) {
        if let Some(active) = &self.active {
            active.cancel.cancel();
        }
    }

    fn start_deployment_guide(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.session.clear();
        self.send(START_DEPLOYMENT_GUIDE.to_string(), false);
    }

    fn cycle_theme(&mut self) {
        let all = Theme::all();
        let index = all
            .iter()
            .position(|t| t.id == self.theme.id)
            .map(|i| (i + 1) % all.len())
            .unwrap_or(0);
        self.theme = all[index].clone();
        self.config.theme = Some(self.theme.id.to_string());
        self.persist_config();
    }

    fn swap_persona(&mut self) {
        self.persona = match self.persona {
            Persona::Tutor => Persona::CodeWizard,
            Persona::CodeWizard => Persona::Tutor,
        };
        self.config.persona = Some(self.persona);
        self.persist_config();
    }

    fn swap_role(&mut self) {
        self.role = match self.role {
            UserRole::Developer => UserRole::NonTechnical,
            UserRole::NonTechnical => UserRole::Developer,
        };
        self.config.role = Some(self.role);
        self.persist_config();
        self.push_welcome();
    }

    fn generate_keys(&mut self) {
        match KeyPair::generate() {
            Ok(pair) => {
                let preview = pair.public_preview();
                self.config.key_pair = Some(pair);
                self.persist_config();
                self.session_note(format!(
                    "Generated a mock fhevmjs key pair (public key {preview}). It is stored with your preferences."
                ));
            }
            Err(e) => self.session_note(format!("Key generation failed: {e}")),
        }
    }

    fn session_note(&mut self, note: String) {
        let index = self.session.open_reply();
        self.session.append_chunk(index, &note);
    }

    fn persist_config(&mut self) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to persist preferences");
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());

        let transcript = build_transcript(
            &self.session,
            &self.theme,
            self.persona.display_name(),
            self.active.is_some(),
            self.opts.syntax_enabled,
        );
        let Transcript {
            lines,
            latest_buttons,
        } = transcript;
        self.latest_buttons = latest_buttons;

        let viewport = chunks[0].height.saturating_sub(2);
        let total = lines.len() as u16;
        let bottom = total.saturating_sub(viewport);
        self.scroll_from_bottom = self.scroll_from_bottom.min(bottom);
        let scroll = bottom - self.scroll_from_bottom;

        let title = format!(
            " FHEVM Tutor \u{2014} {} \u{2014} {} ",
            self.persona.display_name(),
            self.theme.display_name
        );
        let transcript = Paragraph::new(lines)
            .style(Style::default().bg(self.theme.background))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.theme.border_style)
                    .title(Span::styled(title, self.theme.title_style)),
            );
        frame.render_widget(transcript, chunks[0]);

        let input = Paragraph::new(self.input.as_str())
            .style(self.theme.input_style.bg(self.theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style)
                    .title(Span::styled(" Message ", self.theme.title_style)),
            );
        frame.render_widget(input, chunks[1]);
        frame.set_cursor_position((
            chunks[1].x + 1 + self.input.width() as u16,
            chunks[1].y + 1,
        ));
    }
}

struct Transcript {
    lines: Vec<Line<'static>>,
    /// Buttons of the settled latest reply, in display order; the digit keys
    /// index into this sequence. Empty while a reply is streaming.
    latest_buttons: Vec<ButtonDirective>,
}

/// Build the transcript lines for every message. Buttons render as buttons
/// on every model message (the transport is always attached here); only
/// activation is limited to the settled latest reply.
fn build_transcript(
    session: &Session,
    theme: &Theme,
    persona_name: &str,
    streaming: bool,
    syntax_enabled: bool,
) -> Transcript {
    let last_model_index = session
        .messages()
        .iter()
        .rposition(|m| m.role == Sender::Model);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut latest_buttons = Vec::new();
    for (index, message) in session.messages().iter().enumerate() {
        let name = match message.role {
            Sender::User => "You",
            Sender::Model => persona_name,
        };
        lines.push(Line::from(Span::styled(
            format!("{name}:"),
            theme.title_style,
        )));

        if message.content.is_empty() && streaming && Some(index) == last_model_index {
            lines.push(Line::from(Span::styled(
                "\u{2026}".to_string(),
                theme.topic_style,
            )));
        } else {
            let rendered = render_message(message, theme, true, syntax_enabled);
            lines.extend(rendered.lines);
            if Some(index) == last_model_index && !streaming {
                latest_buttons = rendered.buttons;
            }
        }
        lines.push(Line::default());
    }
    Transcript {
        lines,
        latest_buttons,
    }
}
