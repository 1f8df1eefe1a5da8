//! Screen state machine for the interactive host.
//!
//! ```text
//! Boot --(complete | skip)--> Terminal            (host.mode = terminal)
//! Boot --(complete | skip)--> Landing --konami--> Terminal --exit/Esc--> Landing
//! ```
//!
//! The host owns every timer-driven component and advances them from
//! [`Host::tick`]. It never sleeps; the event loop in [`super::app`]
//! calls `tick` at its frame rate.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::Frame;
use tracing::{debug, info};

use super::{boot_view, landing_view, terminal_view};
use crate::boot::{BootSequencer, BootState, BootVariant};
use crate::clock::SharedTimeSource;
use crate::config::{Config, HostMode};
use crate::diagnostics::{self, ControlSurface, Registration};
use crate::konami::{Key, KonamiDetector};
use crate::landing;
use crate::shell::{SessionOptions, SessionSignal, TerminalSession};
use crate::theme::Theme;

const SCROLL_STEP: i32 = 3;
const PAGE_STEP: i32 = 10;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Boot,
    Landing,
    Terminal,
}

/// Everything the host needs to know up front.
#[derive(Debug, Clone)]
pub struct HostOptions {
    pub boot_enabled: bool,
    pub variant: BootVariant,
    pub mode: HostMode,
    pub session: SessionOptions,
    pub theme: Theme,
}

impl HostOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            boot_enabled: config.boot.enabled,
            variant: config.boot.variant,
            mode: config.host.mode,
            session: config.session_options(),
            theme: Theme::named(config.ui.theme),
        }
    }
}

pub struct Host {
    clock: SharedTimeSource,
    options: HostOptions,
    screen: Screen,
    boot: Option<BootSequencer>,
    /// Set by the sequencer's completion callback
    boot_done: Rc<Cell<bool>>,
    /// Set through the diagnostics control surface
    skip_requested: Rc<Cell<bool>>,
    konami: KonamiDetector,
    /// Rows scrolled past on the landing page
    landing_scroll: u16,
    session: Option<TerminalSession>,
    quit: bool,
    _registration: Registration,
}

impl Host {
    /// Build the host and start the boot sequence (if enabled).
    ///
    /// Registers the diagnostics control surface for the host's lifetime.
    pub fn new(clock: SharedTimeSource, options: HostOptions) -> Self {
        let skip_requested = Rc::new(Cell::new(false));
        let flag = Rc::clone(&skip_requested);
        let registration = diagnostics::register(ControlSurface {
            skip_boot: Rc::new(move || flag.set(true)),
        });

        let mut host = Self {
            clock,
            options,
            screen: Screen::Boot,
            boot: None,
            boot_done: Rc::new(Cell::new(false)),
            skip_requested,
            konami: KonamiDetector::new(),
            landing_scroll: 0,
            session: None,
            quit: false,
            _registration: registration,
        };

        if host.options.boot_enabled {
            let mut boot = BootSequencer::new(host.options.variant, host.clock.clone());
            let done = Rc::clone(&host.boot_done);
            boot.start(move || done.set(true));
            host.boot = Some(boot);
        } else {
            debug!("boot sequence disabled");
            host.leave_boot();
        }
        host
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn landing_scroll(&self) -> u16 {
        self.landing_scroll
    }

    pub fn session(&self) -> Option<&TerminalSession> {
        self.session.as_ref()
    }

    pub fn boot_state(&self) -> Option<&BootState> {
        self.boot.as_ref().map(BootSequencer::state)
    }

    /// Advance timers and apply any pending screen change.
    pub fn tick(&mut self) {
        if self.skip_requested.take() {
            self.skip_boot();
        }
        if let Some(boot) = self.boot.as_mut() {
            boot.poll();
        }
        self.sync_boot();
        if let Some(session) = self.session.as_mut() {
            if let Some(result) = session.poll() {
                info!(?result, "air hockey finished");
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => match (self.screen, mouse.kind) {
                (Screen::Boot, MouseEventKind::Down(_)) => {
                    self.skip_boot();
                }
                (Screen::Landing, MouseEventKind::ScrollDown) => self.scroll_landing(SCROLL_STEP),
                (Screen::Landing, MouseEventKind::ScrollUp) => self.scroll_landing(-SCROLL_STEP),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::F(12) {
            self.developer_skip();
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("quit requested");
            self.quit = true;
            return;
        }

        match self.screen {
            Screen::Boot => match key.code {
                KeyCode::Esc => {
                    self.skip_boot();
                }
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            },
            Screen::Landing => {
                match key.code {
                    KeyCode::Char('q') => {
                        self.quit = true;
                        return;
                    }
                    KeyCode::Up => self.scroll_landing(-1),
                    KeyCode::Down => self.scroll_landing(1),
                    KeyCode::PageUp => self.scroll_landing(-PAGE_STEP),
                    KeyCode::PageDown => self.scroll_landing(PAGE_STEP),
                    KeyCode::Home => self.landing_scroll = 0,
                    _ => {}
                }
                // Arrows scroll and still count towards the code
                if self.konami.push(Key::from_key_code(key.code)) {
                    self.open_terminal();
                }
            }
            Screen::Terminal => self.handle_terminal_key(key),
        }
    }

    /// Render the current screen.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let theme = &self.options.theme;
        match self.screen {
            Screen::Boot => {
                if let Some(state) = self.boot_state() {
                    boot_view::render(frame, area, state, theme);
                }
            }
            Screen::Landing => landing_view::render(frame, area, theme, self.landing_scroll),
            Screen::Terminal => {
                if let Some(session) = &self.session {
                    let closable = self.options.mode == HostMode::Konami;
                    terminal_view::render(frame, area, session, theme, closable);
                }
            }
        }
    }

    fn handle_terminal_key(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc if self.options.mode == HostMode::Konami => self.close_terminal(),
            KeyCode::Enter => {
                if session.submit() == SessionSignal::Exit {
                    self.terminal_exit();
                }
            }
            KeyCode::Backspace => session.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                session.push_char(c)
            }
            _ => {}
        }
    }

    /// Skip the boot sequence if it is still skippable.
    fn skip_boot(&mut self) -> bool {
        let skipped = self.boot.as_mut().is_some_and(BootSequencer::skip);
        self.sync_boot();
        skipped
    }

    /// F12: go through the control surface like external tooling would.
    fn developer_skip(&mut self) {
        let reached = diagnostics::skip_boot();
        for line in diagnostics::secrets()
            .into_iter()
            .chain(diagnostics::terminal_hint())
        {
            info!("{}", line);
        }
        if self.skip_requested.take() {
            let skipped = self.skip_boot();
            debug!(reached, skipped, "developer skip");
        }
    }

    fn sync_boot(&mut self) {
        if self.screen == Screen::Boot && self.boot_done.get() {
            self.leave_boot();
        }
    }

    fn leave_boot(&mut self) {
        self.boot = None;
        match self.options.mode {
            HostMode::Terminal => self.open_terminal(),
            HostMode::Konami => {
                info!("showing landing screen");
                self.screen = Screen::Landing;
            }
        }
    }

    fn open_terminal(&mut self) {
        info!("terminal opened");
        self.session = Some(TerminalSession::new(
            self.clock.clone(),
            self.options.session.clone(),
        ));
        self.screen = Screen::Terminal;
    }

    fn scroll_landing(&mut self, delta: i32) {
        let last = landing::page().len().saturating_sub(1);
        let max = u16::try_from(last).unwrap_or(u16::MAX);
        let next = (i32::from(self.landing_scroll) + delta).clamp(0, i32::from(max));
        self.landing_scroll = u16::try_from(next).unwrap_or(max);
    }

    fn close_terminal(&mut self) {
        info!("terminal closed");
        self.session = None;
        self.konami.deactivate();
        self.screen = Screen::Landing;
    }

    /// `exit` typed in the terminal.
    fn terminal_exit(&mut self) {
        match self.options.mode {
            HostMode::Terminal => self.quit = true,
            HostMode::Konami => self.close_terminal(),
        }
    }
}
