//! The two output regions and their write discipline.
//!
//! Both regions live behind one lock so a reader never sees the syntax half
//! of one annotation next to the baseline half of another. Each invocation
//! takes a [`Ticket`] up front; a result is only applied when no later
//! ticket has been applied yet.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::Annotation;

/// Ordering token issued to each annotate invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Contents of both regions, read together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelSnapshot {
    /// `out-text`
    pub syntax: String,
    /// `out-text-baseline`
    pub baseline: String,
    /// Ticket of the invocation that last wrote the panel
    pub applied: Option<u64>,
}

impl PanelSnapshot {
    /// True until the first annotation is applied.
    pub const fn is_blank(&self) -> bool {
        self.applied.is_none()
    }
}

#[derive(Debug, Default)]
struct Regions {
    syntax: String,
    baseline: String,
    applied: Option<Ticket>,
}

/// Output panel holding the syntax and baseline regions.
#[derive(Debug, Default)]
pub struct OutputPanel {
    regions: RwLock<Regions>,
    ticket_counter: AtomicU64,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. Tickets strictly increase.
    pub fn issue_ticket(&self) -> Ticket {
        Ticket(self.ticket_counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Write both regions at once.
    ///
    /// Returns `false` and leaves the panel untouched when a later ticket
    /// has already been applied.
    pub async fn apply(&self, ticket: Ticket, annotation: &Annotation) -> bool {
        let mut regions = self.regions.write().await;
        if regions.applied.is_some_and(|applied| applied > ticket) {
            return false;
        }
        regions.syntax.clone_from(&annotation.syntax);
        regions.baseline.clone_from(&annotation.baseline);
        regions.applied = Some(ticket);
        true
    }

    /// Read both regions under one lock.
    pub async fn snapshot(&self) -> PanelSnapshot {
        let regions = self.regions.read().await;
        PanelSnapshot {
            syntax: regions.syntax.clone(),
            baseline: regions.baseline.clone(),
            applied: regions.applied.map(Ticket::value),
        }
    }
}
