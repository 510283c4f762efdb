//! Control actions and the level-triggered input capability

use std::collections::HashSet;

/// Screen direction. Up is towards smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// One operator control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Pause,
    Resume,
    Reset,
    /// Select the body at this (zero-based) index
    Select(usize),
    /// Change the selected body's velocity
    Nudge(Direction),
    /// Change the selected body's position
    Move(Direction),
}

/// Answers "is this action held right now?" for the current tick.
pub trait InputSource {
    fn is_active(&self, action: Action) -> bool;
}

/// A fixed snapshot of held actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet {
    active: HashSet<Action>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: Action) -> Self {
        self.active.insert(action);
        self
    }

    pub fn insert(&mut self, action: Action) {
        self.active.insert(action);
    }

    pub fn remove(&mut self, action: Action) {
        self.active.remove(&action);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

impl InputSource for ActionSet {
    fn is_active(&self, action: Action) -> bool {
        self.active.contains(&action)
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_active(&self, action: Action) -> bool {
        (**self).is_active(action)
    }
}
