//! Stepping through an adhkar list.

use std::collections::BTreeSet;
use tracing::info;

use crate::engagement::EngagementStore;
use crate::models::{AdhkarItem, VisitOutcome};

/// What a tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdhkarTap {
    /// Current dhikr already done, or the list is empty.
    Ignored,
    Counted { count: u32, target: u32 },
    /// Current dhikr reached its target. `session` is set when this was
    /// the last one outstanding.
    Completed {
        index: usize,
        session: Option<VisitOutcome>,
    },
}

#[derive(Debug, Clone)]
pub struct AdhkarSession {
    store: EngagementStore,
    items: Vec<AdhkarItem>,
    current: usize,
    count: u32,
    completed: BTreeSet<usize>,
}

impl AdhkarSession {
    pub fn new(store: EngagementStore, items: Vec<AdhkarItem>) -> Self {
        Self {
            store,
            items,
            current: 0,
            count: 0,
            completed: BTreeSet::new(),
        }
    }

    pub fn items(&self) -> &[AdhkarItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&AdhkarItem> {
        self.items.get(self.current)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.completed.len() == self.items.len()
    }

    /// Share of the list completed, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        ((self.completed.len() as f64 / self.items.len() as f64) * 100.0).round() as u32
    }

    pub async fn tap(&mut self) -> AdhkarTap {
        let Some(target) = self.current().map(|item| item.target_count) else {
            return AdhkarTap::Ignored;
        };
        if self.is_done(self.current) {
            return AdhkarTap::Ignored;
        }

        self.count = self.count.saturating_add(1);
        if self.count < target {
            return AdhkarTap::Counted {
                count: self.count,
                target,
            };
        }

        let index = self.current;
        self.completed.insert(index);
        let session = if self.is_complete() {
            let outcome = self.store.record_adhkar_completion().await;
            info!(streak = outcome.streak, "Adhkar session completed");
            Some(outcome)
        } else {
            None
        };
        AdhkarTap::Completed { index, session }
    }

    /// Move to the next dhikr. Returns false at the end of the list.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.items.len() {
            self.current += 1;
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Move to the previous dhikr. Returns false at the start.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Jump to `index`, ignoring out-of-range indices.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.current = index;
            self.count = 0;
            true
        } else {
            false
        }
    }
}
