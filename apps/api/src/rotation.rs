//! Spotlight rotation — the one time-driven consumer of the pagination engine.
//!
//! A background task owns a wrap-mode, page-size-1 engine over the project
//! list and advances it on a fixed 20-second period, publishing the current
//! index through an `AtomicUsize` for the spotlight endpoint. The engine
//! itself stays timer-agnostic; the timer lives here, in the host, and stops
//! when the handle is dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::pagination::{NavMode, Paginator};

/// How long each project holds the spotlight.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(20);

/// Handle to the running rotation task. Dropping it stops the timer, so a
/// torn-down host can never navigate a discarded engine.
pub struct Rotator {
    handle: JoinHandle<()>,
}

impl Rotator {
    /// Spawns the rotation task over `items`. With zero or one item there is
    /// nothing to rotate and the task exits immediately (wrap navigation on
    /// a single page is a no-op anyway).
    pub fn spawn<T: Send + Sync + 'static>(
        items: Vec<T>,
        period: Duration,
        spotlight: Arc<AtomicUsize>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            if items.len() < 2 {
                return;
            }
            let Ok(mut pager) = Paginator::with_mode(&items, 1, NavMode::Wrap) else {
                return;
            };

            let mut ticker = tokio::time::interval(period);
            // The first interval tick fires immediately; consume it so the
            // initial spotlight holds for a full period.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                pager.next_page();
                let index = pager.current_page() - 1;
                spotlight.store(index, Ordering::Relaxed);
                debug!(index, "Spotlight advanced");
            }
        });
        Self { handle }
    }
}

impl Drop for Rotator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
