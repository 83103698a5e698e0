//! Single, collapsible accordion.
//!
//! At most one item is open. Toggling the open item closes it; toggling any
//! other item opens it and closes the previous one.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::Theme;

/// Focus and open state of an accordion with a fixed number of items.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    len: usize,
    focused: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Creates an accordion of `len` items, all collapsed.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: 0,
            open: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the focused item.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Index of the open item, if any.
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Moves focus to the next item, wrapping at the end.
    pub fn focus_next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.focused = (self.focused + 1) % self.len;
    }

    /// Moves focus to the previous item, wrapping at the start.
    pub fn focus_prev(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.focused == 0 {
            self.focused = self.len - 1;
        } else {
            self.focused -= 1;
        }
    }

    /// Opens the focused item, or closes it if it is already open.
    pub fn toggle(&mut self) {
        if self.is_empty() {
            return;
        }
        self.open = if self.open == Some(self.focused) {
            None
        } else {
            Some(self.focused)
        };
    }

    /// Closes every item and moves focus back to the first.
    pub fn collapse(&mut self) {
        self.open = None;
        self.focused = 0;
    }

    /// Header line for item `index`: chevron plus title.
    pub fn header_line(&self, index: usize, title: &str, theme: &Theme) -> Line<'static> {
        let chevron = if self.is_open(index) { "▾" } else { "▸" };
        let style = if index == self.focused {
            Style::default()
                .fg(theme.fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.bold
        };

        Line::from(vec![
            Span::styled(format!("{} ", chevron), Style::default().fg(theme.primary)),
            Span::styled(title.to_string(), style),
        ])
    }
}
