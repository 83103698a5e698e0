//! Main application struct and event loop for the DevOps Center TUI.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::clipboard::copy_to_clipboard;
use crate::keybindings::{Action, KeyBindings};
use crate::state::{AppState, Mode};
use crate::templates::{self, Template};
use crate::views::{CONFIG_FILES, Section, render_scrolled, view_for, workflow_template};
use crate::widgets::{COMPACT_WIDTH, NAV_HEIGHT, NavBar, STATUS_HEIGHT, StatusBar, render_help};
use crate::{DevopsTerminal, Theme, devops_default, restore_terminal, setup_terminal};

/// Default interval between spinner frames.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Startup options for [`App`].
#[derive(Debug, Clone)]
pub struct TuiConfig {
    pub initial_section: Section,
    pub tick_rate: Duration,
    /// Directory downloads are written to.
    pub export_dir: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            initial_section: Section::default(),
            tick_rate: DEFAULT_TICK_RATE,
            export_dir: PathBuf::from("."),
        }
    }
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub running: bool,
    /// Feedback from the last copy or download, cleared on the next key.
    pub status_message: Option<String>,
    pub export_dir: PathBuf,
    pub tick_rate: Duration,
    /// Last known terminal area, used to clamp scrolling.
    pub viewport: Rect,
}

impl App {
    /// Creates a new App instance with default settings.
    pub fn new() -> Self {
        Self::with_config(TuiConfig::default())
    }

    /// Creates a new App from startup options.
    pub fn with_config(config: TuiConfig) -> Self {
        Self {
            state: AppState::starting_at(config.initial_section),
            keybindings: KeyBindings::default(),
            theme: devops_default(),
            running: true,
            status_message: None,
            export_dir: config.export_dir,
            tick_rate: config.tick_rate,
            viewport: Rect::new(0, 0, 80, 24),
        }
    }

    /// The section currently shown.
    pub fn current(&self) -> Section {
        self.state.selector.current()
    }

    /// Shows `section`. Returns whether the visible section changed.
    ///
    /// Entering a different section starts it fresh; re-selecting the
    /// current one leaves its scroll and widget state alone.
    pub fn select(&mut self, section: Section) -> bool {
        let changed = self.state.selector.select(section);
        if changed {
            self.state.reset_section_state();
        }
        changed
    }

    /// Shows the section named `id`, falling back to the dashboard for
    /// unknown ids. Returns the section now shown.
    pub fn select_id(&mut self, id: &str) -> Section {
        self.select(Section::resolve(id));
        self.current()
    }

    /// Handles a key event.
    ///
    /// Resolves the key to an action using keybindings, then executes the action.
    /// Ctrl-C is handled as a special case to always quit.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl-C always quits (special case, not in keybindings)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        self.status_message = None;

        let key = normalize(key);
        if let Some(action) = self
            .keybindings
            .resolve(key, self.current(), self.state.mode)
        {
            self.execute_action(action);
        }
    }

    /// Executes an action.
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NextSection => {
                self.select(self.current().next());
            }
            Action::PrevSection => {
                self.select(self.current().prev());
            }
            Action::JumpToSection(n) => {
                if let Some(section) = n.checked_sub(1).and_then(Section::from_index) {
                    self.select(section);
                }
            }
            Action::ScrollUp => self.state.scroll = self.state.scroll.saturating_sub(1),
            Action::ScrollDown => {
                self.state.scroll = self.state.scroll.saturating_add(1).min(self.max_scroll());
            }
            Action::ScrollTop => self.state.scroll = 0,
            Action::ScrollBottom => self.state.scroll = self.max_scroll(),
            Action::PrevTab | Action::NextTab => {
                match self.current() {
                    Section::CiCd => self.state.workflow_tab = self.state.workflow_tab.toggled(),
                    Section::Guide => self.state.steps_tab = self.state.steps_tab.toggled(),
                    Section::Dashboard | Section::Monitoring => {}
                }
                self.clamp_scroll();
            }
            Action::NextItem => self.state.config_files.focus_next(),
            Action::PrevItem => self.state.config_files.focus_prev(),
            Action::Toggle => {
                self.state.config_files.toggle();
                self.clamp_scroll();
            }
            Action::Copy => self.copy_focused(),
            Action::Download => self.download_focused(),
            Action::ToggleMenu => {
                if self.state.mode == Mode::Menu {
                    self.state.mode = Mode::Normal;
                } else {
                    self.state.menu.open_at(self.current());
                    self.state.mode = Mode::Menu;
                }
            }
            Action::ToggleHelp => {
                self.state.mode = if self.state.mode == Mode::Help {
                    Mode::Normal
                } else {
                    Mode::Help
                };
            }
            Action::Back => self.state.mode = Mode::Normal,
            Action::NavigateUp => self.state.menu.select_prev(),
            Action::NavigateDown => self.state.menu.select_next(),
            Action::Select => {
                if self.state.mode == Mode::Menu {
                    let section = self.state.menu.highlighted();
                    self.state.mode = Mode::Normal;
                    self.select(section);
                }
            }
        }
    }

    /// Template the copy action acts on, if the section has one in focus.
    pub fn copy_target(&self) -> Option<Template> {
        match self.current() {
            Section::CiCd => Some(workflow_template(self.state.workflow_tab)),
            Section::Guide => self
                .state
                .config_files
                .open()
                .and_then(|i| CONFIG_FILES.get(i))
                .map(|file| file.template),
            Section::Dashboard | Section::Monitoring => None,
        }
    }

    /// Template the download action writes. The guide downloads itself when
    /// no configuration file is open.
    pub fn download_target(&self) -> Option<Template> {
        match self.current() {
            Section::Guide => self.copy_target().or(Some(Template::Guide)),
            _ => self.copy_target(),
        }
    }

    fn copy_focused(&mut self) {
        let Some(template) = self.copy_target() else {
            self.status_message = Some(match self.current() {
                Section::Guide => "Open a configuration file to copy it".to_string(),
                _ => "Nothing to copy here".to_string(),
            });
            return;
        };

        self.status_message = Some(match copy_to_clipboard(&template.contents()) {
            Ok(()) => {
                tracing::debug!(template = %template, "copied template to clipboard");
                format!("Copied {} to clipboard", template.file_name())
            }
            Err(err) => {
                tracing::warn!(template = %template, error = %err, "copy failed");
                format!("Copy failed: {}", err)
            }
        });
    }

    fn download_focused(&mut self) {
        let Some(template) = self.download_target() else {
            self.status_message = Some("Nothing to download here".to_string());
            return;
        };

        self.status_message = Some(match templates::export(template, &self.export_dir) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                tracing::warn!(template = %template, error = %err, "download failed");
                format!("Download failed: {}", err)
            }
        });
    }

    /// Rows available to the section body in the current viewport.
    fn body_height(&self) -> u16 {
        self.viewport
            .height
            .saturating_sub(NAV_HEIGHT + STATUS_HEIGHT)
    }

    /// Largest useful scroll offset for the current section.
    pub fn max_scroll(&self) -> u16 {
        view_for(self.current())
            .height(self.viewport.width, self)
            .saturating_sub(self.body_height())
    }

    fn clamp_scroll(&mut self) {
        self.state.scroll = self.state.scroll.min(self.max_scroll());
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        self.state.tick = self.state.tick.wrapping_add(1);
    }

    /// Renders the application to the terminal frame.
    ///
    /// Navigation bar on top, the current section in the middle and the
    /// status bar at the bottom. Overlays draw last.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [nav, body, status] = Layout::vertical([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        let section = self.current();
        let compact = area.width < COMPACT_WIDTH;
        frame.render_widget(NavBar::new(section, compact, &self.theme), nav);

        render_scrolled(
            view_for(section),
            body,
            frame.buffer_mut(),
            self,
            self.state.scroll,
        );

        frame.render_widget(
            StatusBar::new(section, self.status_message.as_deref(), &self.theme),
            status,
        );

        match self.state.mode {
            Mode::Menu => self.state.menu.render(frame, section, &self.theme),
            Mode::Help => render_help(frame, &self.theme),
            Mode::Normal => {}
        }
    }

    /// Runs the main event loop.
    ///
    /// Sets up the terminal, enters the render/input loop, and restores
    /// the terminal on exit. Returns an error if terminal setup fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        tracing::info!(section = %self.current(), "starting dashboard");

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if event loop failed
        restore_terminal(&mut terminal)?;

        result
    }

    /// The core event loop. Separated from `run` for testability.
    fn event_loop(&mut self, terminal: &mut DevopsTerminal) -> io::Result<()> {
        let mut last_tick = Instant::now();

        while self.running {
            let size = terminal.size()?;
            self.viewport = Rect::new(0, 0, size.width, size.height);
            self.clamp_scroll();

            terminal.draw(|f| self.render(f))?;

            // Handle input with timeout for tick
            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.tick();
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops SHIFT from character keys and resets event kind and state so the
/// key matches the binding tables.
fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    if matches!(key.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(key.code, modifiers)
}
