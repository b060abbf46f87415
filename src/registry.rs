use function_name::named;
use std::collections::HashMap;
use tracing::{info, instrument};

/// A dense index standing in for an interned label. Indices start at 0
/// and follow first-seen order, so they can be used directly as slots
/// in a `Vec`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct LabelId(u32);

impl LabelId {
    pub fn new(index: u32) -> Self {
        LabelId(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

/// The label↔index seam.
///
/// Adding the same label twice returns the same [`LabelId`] both times.
pub trait Labels {
    fn add(&mut self, label: &str) -> LabelId;
    fn get_by_label(&self, label: &str) -> Option<LabelId>;
    fn get_by_index(&self, index: u32) -> Option<&str>;
}

/// Single-owner registry of labels with dense, first-seen indices.
///
/// Labels are only ever added, never removed, so an id stays valid for
/// the registry's whole lifetime. This type is NOT synchronized:
/// insertion takes `&mut self`, which makes unserialized concurrent use
/// a compile error. Share one across threads via
/// [`SharedLabelRegistry`](crate::shared::SharedLabelRegistry) instead.
#[derive(Debug, Default, Clone)]
pub struct LabelRegistry {
    indices: HashMap<String, LabelId>,
    labels: Vec<String>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All (label, id) pairs in first-added order. Each call starts a
    /// fresh traversal; the borrow on `self` rules out mutation while
    /// the iterator is live.
    pub fn entries(&self) -> impl Iterator<Item = (&str, LabelId)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.as_str(), LabelId(index as u32)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Labels for LabelRegistry {
    #[named]
    #[instrument(skip(self), ret)]
    fn add(&mut self, label: &str) -> LabelId {
        if let Some(&id) = self.indices.get(label) {
            return id;
        }
        // both tables move together; the next index is always the count
        // of labels seen so far
        let id = LabelId(self.labels.len() as u32);
        self.indices.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        info!(op = function_name!(), label = label, index = id.index());
        id
    }

    fn get_by_label(&self, label: &str) -> Option<LabelId> {
        self.indices.get(label).copied()
    }

    fn get_by_index(&self, index: u32) -> Option<&str> {
        self.labels.get(index as usize).map(String::as_str)
    }
}
