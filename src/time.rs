// Defines the timestamp type and the monotonic clock capability
// Copyright © 2026 tacho_motor contributors
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::{Add, Sub};
use core::time::Duration;

/// Nanoseconds in one second. Position deltas are scaled by this before
/// dividing by the time delta, so speeds come out in counts per second.
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A monotonic timestamp with nanosecond resolution.
///
/// The estimator only ever looks at differences between timestamps, so the
/// epoch is arbitrary; boot time, process start, or the UNIX epoch all work
/// as long as the source never goes backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nanos(pub i64);

impl Nanos {
    /// Constructs a timestamp from whole seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Nanos(secs * NANOS_PER_SEC)
    }

    /// Constructs a timestamp from whole milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Nanos(millis * 1_000_000)
    }

    /// Constructs a timestamp from whole microseconds.
    pub const fn from_micros(micros: i64) -> Self {
        Nanos(micros * 1_000)
    }

    /// Returns the underlying nanosecond count.
    pub const fn as_nanos(self) -> i64 {
        self.0
    }
}

/// The signed nanosecond difference between two timestamps.
impl Sub for Nanos {
    type Output = i64;

    fn sub(self, earlier: Self) -> i64 {
        self.0 - earlier.0
    }
}

impl Add<Duration> for Nanos {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Nanos(self.0 + rhs.as_nanos() as i64)
    }
}

/// A source of monotonic timestamps with nanosecond-scale resolution.
///
/// [`SpeedEstimator::update_now`](crate::speed::SpeedEstimator::update_now)
/// uses this to stamp samples when the caller does not carry its own
/// timer reads. Implementations must never run backwards; resolution
/// coarser than a tick interval degrades the estimate but is otherwise
/// harmless.
pub trait MonotonicClock {
    /// Returns the current reading of the clock.
    fn now(&self) -> Nanos;
}

#[cfg(feature = "std")]
mod std_clock {

    use super::{MonotonicClock, Nanos};

    /// A [`MonotonicClock`] backed by `std::time::Instant`, anchored at the
    /// moment the clock is constructed.
    #[derive(Debug, Clone, Copy)]
    pub struct StdClock {
        origin: std::time::Instant,
    }

    impl StdClock {
        /// Creates a clock whose readings count from zero at this call.
        pub fn new() -> Self {
            StdClock {
                origin: std::time::Instant::now(),
            }
        }
    }

    impl Default for StdClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MonotonicClock for StdClock {
        fn now(&self) -> Nanos {
            Nanos(self.origin.elapsed().as_nanos() as i64)
        }
    }

    /// Tests that readings from the same StdClock start at zero and never
    /// run backwards.
    #[cfg(all(test, feature = "std"))]
    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a.as_nanos() >= 0);
        assert!(b >= a);
    }
}

#[cfg(feature = "std")]
pub use std_clock::StdClock;
