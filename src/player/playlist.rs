// SPDX-License-Identifier: MPL-2.0
//! Ordered list of sources with a current position.
//!
//! Navigation does not wrap: `next` on the last item and `previous` on the
//! first one return `None` and leave the position unchanged.

use crate::domain::media::MediaSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    items: Vec<MediaSource>,
    current: Option<usize>,
}

impl Playlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with a single source and selects it.
    pub fn open_single(&mut self, source: MediaSource) -> &MediaSource {
        self.items = vec![source];
        self.current = Some(0);
        &self.items[0]
    }

    /// Replaces the list and selects the first item, if any.
    pub fn replace(&mut self, sources: Vec<MediaSource>) -> Option<&MediaSource> {
        self.items = sources;
        self.current = if self.items.is_empty() { None } else { Some(0) };
        self.current()
    }

    /// Appends sources. Selects the first appended one if nothing was selected.
    pub fn extend(&mut self, sources: impl IntoIterator<Item = MediaSource>) {
        let before = self.items.len();
        self.items.extend(sources);
        if self.current.is_none() && self.items.len() > before {
            self.current = Some(before);
        }
    }

    /// Selects the item at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<&MediaSource> {
        if index >= self.items.len() {
            return None;
        }
        self.current = Some(index);
        self.items.get(index)
    }

    /// Moves to the following item.
    pub fn next(&mut self) -> Option<&MediaSource> {
        let index = self.current? + 1;
        self.select(index)
    }

    /// Moves to the preceding item.
    pub fn previous(&mut self) -> Option<&MediaSource> {
        let index = self.current?.checked_sub(1)?;
        self.select(index)
    }

    /// Called when the current item finished playing.
    ///
    /// Returns the next source to load, or `None` when the list is done.
    pub fn advance_on_end(&mut self) -> Option<&MediaSource> {
        self.next()
    }

    #[must_use]
    pub fn current(&self) -> Option<&MediaSource> {
        self.current.and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current.is_some_and(|index| index + 1 < self.items.len())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current.is_some_and(|index| index > 0)
    }

    #[must_use]
    pub fn items(&self) -> &[MediaSource] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
