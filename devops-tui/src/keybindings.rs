//! Keybindings system for the DevOps Center TUI.
//!
//! Provides vim-style keybindings with global and section-specific layers.
//! Section-specific bindings override global bindings when defined. Overlays
//! (section menu, help) have their own layer that replaces the others.
//!
//! Character keys are stored without the SHIFT modifier; callers strip it
//! before resolving since the character already carries the case.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Mode;
use crate::views::Section;

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Sections
    NextSection,
    PrevSection,
    /// 1-based position in the navigation bar.
    JumpToSection(usize),

    // Body scrolling
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,

    // Inner widgets
    PrevTab,
    NextTab,
    NextItem,
    PrevItem,
    Toggle,

    // Templates
    Copy,
    Download,

    // Overlays
    ToggleMenu,
    ToggleHelp,
    Back,
    NavigateUp,
    NavigateDown,
    Select,
}

/// Keybindings configuration with global, section-specific and overlay layers.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Global keybindings that apply to every section.
    pub global: HashMap<KeyEvent, Action>,
    /// Section-specific keybindings that override global bindings.
    pub view_specific: HashMap<Section, HashMap<KeyEvent, Action>>,
    /// Bindings while the section menu is open.
    menu: HashMap<KeyEvent, Action>,
    /// Bindings while the help overlay is open.
    help: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    /// Resolve a key press to an action for the given section and mode.
    ///
    /// In normal mode section-specific bindings take precedence over global
    /// ones. Overlay modes only see their own layer.
    pub fn resolve(&self, key: KeyEvent, section: Section, mode: Mode) -> Option<Action> {
        match mode {
            Mode::Menu => return self.menu.get(&key).cloned(),
            Mode::Help => return self.help.get(&key).cloned(),
            Mode::Normal => {}
        }

        if let Some(view_bindings) = self.view_specific.get(&section)
            && let Some(action) = view_bindings.get(&key)
        {
            return Some(action.clone());
        }

        self.global.get(&key).cloned()
    }

    /// Add a section-specific keybinding.
    pub fn add_view_binding(&mut self, section: Section, key: KeyEvent, action: Action) {
        self.view_specific
            .entry(section)
            .or_default()
            .insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        // Sections
        global.insert(key_code(KeyCode::Tab), Action::NextSection);
        global.insert(key_code(KeyCode::BackTab), Action::PrevSection);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevSection,
        );
        for (i, c) in ('1'..='9').take(Section::ALL.len()).enumerate() {
            global.insert(key(c), Action::JumpToSection(i + 1));
        }

        // Scrolling - vim style and arrow keys
        global.insert(key('j'), Action::ScrollDown);
        global.insert(key('k'), Action::ScrollUp);
        global.insert(key_code(KeyCode::Down), Action::ScrollDown);
        global.insert(key_code(KeyCode::Up), Action::ScrollUp);
        global.insert(key('g'), Action::ScrollTop);
        global.insert(key('G'), Action::ScrollBottom);

        // Templates
        global.insert(key('y'), Action::Copy);
        global.insert(key('s'), Action::Download);

        // Overlays
        global.insert(key('m'), Action::ToggleMenu);
        global.insert(key('?'), Action::ToggleHelp);
        global.insert(key_code(KeyCode::Esc), Action::Back);
        global.insert(key('q'), Action::Quit);

        let mut bindings = Self {
            global,
            view_specific: HashMap::new(),
            menu: menu_bindings(),
            help: help_bindings(),
        };

        // Inner tab strips
        for section in [Section::CiCd, Section::Guide] {
            for (k, action) in [
                (key('h'), Action::PrevTab),
                (key('l'), Action::NextTab),
                (key_code(KeyCode::Left), Action::PrevTab),
                (key_code(KeyCode::Right), Action::NextTab),
            ] {
                bindings.add_view_binding(section, k, action);
            }
        }

        // Configuration file accordion
        bindings.add_view_binding(Section::Guide, key('n'), Action::NextItem);
        bindings.add_view_binding(Section::Guide, key('p'), Action::PrevItem);
        bindings.add_view_binding(Section::Guide, key_code(KeyCode::Enter), Action::Toggle);
        bindings.add_view_binding(Section::Guide, key(' '), Action::Toggle);

        bindings
    }
}

fn menu_bindings() -> HashMap<KeyEvent, Action> {
    let mut menu = HashMap::new();
    menu.insert(key('j'), Action::NavigateDown);
    menu.insert(key('k'), Action::NavigateUp);
    menu.insert(key_code(KeyCode::Down), Action::NavigateDown);
    menu.insert(key_code(KeyCode::Up), Action::NavigateUp);
    menu.insert(key_code(KeyCode::Enter), Action::Select);
    menu.insert(key_code(KeyCode::Esc), Action::Back);
    menu.insert(key('m'), Action::Back);
    menu.insert(key('q'), Action::Quit);
    menu
}

fn help_bindings() -> HashMap<KeyEvent, Action> {
    let mut help = HashMap::new();
    help.insert(key_code(KeyCode::Esc), Action::Back);
    help.insert(key('?'), Action::Back);
    help.insert(key('q'), Action::Quit);
    help
}

/// Helper to create a KeyEvent from a character.
fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Helper to create a KeyEvent from a KeyCode.
fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
