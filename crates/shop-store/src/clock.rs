//! Time source for order dates and address ids.
//!
//! Instants are UTC. Calendar dates shown to the shopper (order date,
//! delivery estimate) come from [`Clock::now_local`], which carries the
//! shopper's offset.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, FixedOffset, Local, Offset, TimeZone, Utc};

/// Supplies the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current time at the shopper's UTC offset.
    fn now_local(&self) -> DateTime<FixedOffset> {
        self.now().fixed_offset()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to. Used for deterministic sessions.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
    offset: FixedOffset,
}

impl FixedClock {
    /// A clock stopped at `at`, for a shopper on UTC.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self::with_offset(at, Utc.fix())
    }

    /// A clock stopped at `at`, for a shopper at `offset`.
    pub fn with_offset(at: DateTime<Utc>, offset: FixedOffset) -> Self {
        FixedClock {
            millis: AtomicI64::new(at.timestamp_millis()),
            offset,
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        self.now().with_timezone(&self.offset)
    }
}
