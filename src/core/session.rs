use rand::Rng;

use crate::core::{
    errors::HadithError,
    models::{
        Collection,
        Record,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(&self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub enabled: bool,
    pub label: &'static str,
}

/// Enabled state and labels of the paging controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub previous: NavButton,
    pub next: NavButton,
}

impl NavigationState {
    pub fn for_position(position: usize, len: usize) -> Self {
        let previous_enabled = position > 0;
        let next_enabled = position + 1 < len;

        Self {
            previous: NavButton {
                enabled: previous_enabled,
                label: if previous_enabled { "↑ Previous Hadith" } else { "Start of Chapter" },
            },
            next: NavButton {
                enabled: next_enabled,
                label: if next_enabled { "↓ Next Hadith" } else { "End of Chapter" },
            },
        }
    }
}

/// The merged section currently being read. Never empty; `position` always
/// indexes into `records`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    collection: Collection,
    section: u32,
    position: usize,
    records: Vec<Record>,
}

impl Session {
    pub fn new(
        collection: Collection,
        section: u32,
        records: Vec<Record>,
    ) -> Result<Self, HadithError> {
        if records.is_empty() {
            return Err(HadithError::EmptySection { collection, section });
        }

        Ok(Self { collection, section, position: 0, records })
    }

    pub fn with_random_position<R: Rng>(mut self, rng: &mut R) -> Self {
        self.position = rng.random_range(0..self.records.len());
        self
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn current(&self) -> &Record {
        &self.records[self.position]
    }

    /// Moves one record in `direction`. Returns `None`, leaving the position
    /// alone, when there is nothing further that way.
    pub fn step(&mut self, direction: Direction) -> Option<&Record> {
        let candidate = self.position.checked_add_signed(direction.offset())?;
        if candidate >= self.records.len() {
            return None;
        }

        self.position = candidate;
        Some(&self.records[candidate])
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState::for_position(self.position, self.records.len())
    }
}
