//! Wall-clock access for notices and upload object keys.

use std::cell::Cell;
use std::time::Duration;

/// Milliseconds since the Unix epoch.
pub type EpochMillis = u64;

pub trait Clock {
    fn now(&self) -> EpochMillis;
}

/// The real clock: `Date.now()` in the browser, `SystemTime` on native.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    fn now(&self) -> EpochMillis {
        js_sys::Date::now() as EpochMillis
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    fn now(&self) -> EpochMillis {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as EpochMillis)
            .unwrap_or(0)
    }
}

/// Whole milliseconds in `d`, saturating at `EpochMillis::MAX`.
pub fn millis(d: Duration) -> EpochMillis {
    EpochMillis::try_from(d.as_millis()).unwrap_or(EpochMillis::MAX)
}

/// A clock that only moves when told to. Used to simulate elapsed time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<EpochMillis>,
}

impl ManualClock {
    pub fn starting_at(now: EpochMillis) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(millis(by)));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> EpochMillis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> EpochMillis {
        (**self).now()
    }
}
