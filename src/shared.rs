use crate::registry::{LabelId, LabelRegistry, Labels};
use std::sync::{Arc, Mutex, MutexGuard};

/// Lock-guarded [`LabelRegistry`] handle for concurrent callers.
///
/// Every operation runs under one mutex, so `add`'s check-then-insert
/// is atomic: two threads racing to add the same new label cannot both
/// mint an index, and assigned indices stay dense. Cloning a handle
/// shares the underlying registry.
#[derive(Debug, Default, Clone)]
pub struct SharedLabelRegistry {
    inner: Arc<Mutex<LabelRegistry>>,
}

impl SharedLabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, label: &str) -> LabelId {
        self.lock().add(label)
    }

    pub fn get_by_label(&self, label: &str) -> Option<LabelId> {
        self.lock().get_by_label(label)
    }

    pub fn get_by_index(&self, index: u32) -> Option<String> {
        self.lock().get_by_index(index).map(str::to_string)
    }

    /// Snapshot of all (label, id) pairs in first-added order, taken
    /// under the lock. Adds that land after the call do not show up in
    /// the returned vec.
    pub fn entries(&self) -> Vec<(String, LabelId)> {
        self.lock()
            .entries()
            .map(|(label, id)| (label.to_string(), id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, LabelRegistry> {
        self.inner.lock().unwrap()
    }
}
