use crate::domain::model::{Identified, Stage};
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;

/// An immutable, ordered, non-empty list of items with unique ids.
///
/// Once built there is no way to add, remove or reorder items; new content
/// means building a new sequence. Every [`Cursor`](crate::core::cursor::Cursor)
/// relies on the non-empty guarantee for its modular arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

pub type StageCollection = Sequence<Stage>;

impl<T: Identified> Sequence<T> {
    pub fn new(items: Vec<T>) -> Result<Self> {
        Self::named("collection", items)
    }

    /// Like [`Sequence::new`], but errors name the collection, e.g.
    /// `"journey.stages"`.
    pub fn named(name: &str, items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::config(format!(
                "{} needs at least one entry",
                name
            )));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(SiteError::config(format!(
                    "duplicate id '{}' in {}",
                    item.id(),
                    name
                )));
            }
        }

        tracing::debug!("Built {} with {} entries", name, items.len());
        Ok(Self { items })
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T> Sequence<T> {
    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> &T {
        &self.items[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
