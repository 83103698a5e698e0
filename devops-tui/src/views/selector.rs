//! Section selection for the dashboard shell.
//!
//! The shell shows exactly one [`Section`] at a time. [`SectionSelector`]
//! owns that choice and is the only place it changes.

use std::fmt;
use std::str::FromStr;

/// The closed set of sections the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    CiCd,
    Monitoring,
    Guide,
}

/// Returned when a section identifier is not one of the known ids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}' (expected dashboard, cicd, monitoring or guide)")]
pub struct UnknownSection(pub String);

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::CiCd,
        Section::Monitoring,
        Section::Guide,
    ];

    /// Stable identifier, as used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::CiCd => "cicd",
            Self::Monitoring => "monitoring",
            Self::Guide => "guide",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::CiCd => "CI/CD",
            Self::Monitoring => "Monitoring",
            Self::Guide => "Deploy Guide",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::CiCd => 1,
            Self::Monitoring => 2,
            Self::Guide => 3,
        }
    }

    /// Section at `index`, if any.
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Resolves an identifier, falling back to the default section.
    ///
    /// This is the one place an unknown identifier is tolerated: it maps to
    /// [`Section::Dashboard`] and is logged.
    pub fn resolve(id: &str) -> Section {
        id.parse().unwrap_or_else(|err: UnknownSection| {
            tracing::warn!(%err, fallback = Section::default().id(), "falling back to default section");
            Section::default()
        })
    }

    /// Section after this one in navigation order, wrapping.
    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Holds the currently selected section.
#[derive(Debug, Clone, Default)]
pub struct SectionSelector {
    current: Section,
}

impl SectionSelector {
    /// Creates a selector starting at the default section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector starting at `section`.
    pub fn starting_at(section: Section) -> Self {
        Self { current: section }
    }

    /// The section currently shown.
    pub fn current(&self) -> Section {
        self.current
    }

    /// Selects `section`, returning true if the visible section changed.
    pub fn select(&mut self, section: Section) -> bool {
        if self.current == section {
            return false;
        }
        tracing::debug!(from = %self.current, to = %section, "section selected");
        self.current = section;
        true
    }

    /// Selects by identifier; unknown ids select the default section.
    ///
    /// Returns the section now shown.
    pub fn select_id(&mut self, id: &str) -> Section {
        let section = Section::resolve(id);
        self.select(section);
        section
    }

    /// Selects the next section, wrapping after the last.
    pub fn next(&mut self) -> Section {
        let next = self.current.next();
        self.select(next);
        next
    }

    /// Selects the previous section, wrapping before the first.
    pub fn prev(&mut self) -> Section {
        let prev = self.current.prev();
        self.select(prev);
        prev
    }
}
