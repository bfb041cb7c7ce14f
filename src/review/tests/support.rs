//! Clocks with controllable time for lifecycle tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances by `step_secs` every time it is read.
///
/// A negative step simulates a clock running backwards.
#[derive(Debug)]
pub struct StepClock {
    next_secs: AtomicI64,
    step_secs: i64,
}

impl StepClock {
    pub fn forward() -> Self {
        Self::with_step(60)
    }

    pub fn backward() -> Self {
        Self::with_step(-60)
    }

    fn with_step(step_secs: i64) -> Self {
        Self {
            next_secs: AtomicI64::new(1_700_000_000),
            step_secs,
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let secs = self.next_secs.fetch_add(self.step_secs, Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0)
            .single()
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs))
    }
}
