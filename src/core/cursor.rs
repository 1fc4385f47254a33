use crate::core::sequence::Sequence;
use crate::domain::model::Stage;
use crate::utils::error::{Result, SiteError};
use std::sync::Arc;

/// The focused position within a [`Sequence`], owned by one view session.
///
/// Navigation wraps in both directions and the index always satisfies
/// `0 <= index < len`. Starts at 0.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Arc<Sequence<T>>,
    index: usize,
}

pub type StageCursor = Cursor<Stage>;

impl<T> Cursor<T> {
    pub fn new(items: Arc<Sequence<T>>) -> Self {
        Self { items, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current(&self) -> &T {
        &self.items.as_slice()[self.index]
    }

    pub fn items(&self) -> &Sequence<T> {
        &self.items
    }

    pub fn advance(&mut self) -> &T {
        self.index = (self.index + 1) % self.len();
        self.current()
    }

    pub fn retreat(&mut self) -> &T {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    pub fn jump_to(&mut self, target: usize) -> Result<&T> {
        if target >= self.len() {
            return Err(SiteError::OutOfRangeError {
                index: target,
                len: self.len(),
            });
        }
        self.index = target;
        Ok(self.current())
    }

    pub fn reset(&mut self) -> &T {
        self.index = 0;
        self.current()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len()
    }
}
