//! Update/render coalescing.
//!
//! Every slider drag produces a burst of state updates, but only the latest
//! one needs rendering. The contract: apply each state update synchronously,
//! hold at most one pending render per flush. [`UpdateCoalescer`] is the
//! event-loop-agnostic half of that contract — the caller owns the actual
//! deferral (animation frame, timer, channel), the coalescer owns the
//! latest-wins state and the single-render-in-flight rule.

/// Latest-wins holder for a pending view state.
#[derive(Debug, Clone, Default)]
pub struct UpdateCoalescer<T> {
    pending: Option<T>,
    render_scheduled: bool,
    coalesced: u64,
}

impl<T> UpdateCoalescer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: None,
            render_scheduled: false,
            coalesced: 0,
        }
    }

    /// Record a state update, replacing any not-yet-rendered predecessor.
    ///
    /// Returns `true` when the caller should schedule a flush; `false` when
    /// one is already in flight and this update rode along with it.
    pub fn update(&mut self, state: T) -> bool {
        if self.pending.is_some() {
            self.coalesced += 1;
        }
        self.pending = Some(state);
        if self.render_scheduled {
            false
        } else {
            self.render_scheduled = true;
            true
        }
    }

    /// Take the latest state for rendering, re-arming the scheduler.
    pub fn flush(&mut self) -> Option<T> {
        self.render_scheduled = false;
        self.pending.take()
    }

    /// Whether a flush is currently owed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of updates that were superseded before being rendered.
    #[must_use]
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}
