use std::collections::VecDeque;
use std::sync::Mutex;

/// Bounded FIFO of probe-failure descriptions.
///
/// When the log is full the oldest entry is evicted, so a long-lived client
/// whose coordinator is unreachable does not grow without bound. Appends and
/// snapshots take a short internal lock, so the log is safe to share across
/// concurrent probes.
#[derive(Debug)]
pub struct ErrorLog {
    entries: Mutex<VecDeque<String>>,
    capacity: usize,
}

/// Default number of retained entries.
pub const DEFAULT_ERROR_CAPACITY: usize = 64;

impl ErrorLog {
    /// Creates a log retaining at most `capacity` entries. A capacity of
    /// zero retains nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one if the log is full.
    pub fn push(&self, entry: String) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.capacity == 0 {
            return;
        }
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of retained entries in append order.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ERROR_CAPACITY)
    }
}
