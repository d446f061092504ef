use core::sync::atomic::{AtomicI32, Ordering};

use crate::time::{MonotonicClock, Nanos, NANOS_PER_SEC};

/// Capacity of the sample history. Must be a power of two so the cursors
/// can wrap with a mask instead of a modulo.
pub const BUFFER_SIZE: usize = 256;

const INDEX_MASK: usize = BUFFER_SIZE - 1;

/// Derives a smoothed instantaneous speed from a stream of
/// `(position, timestamp)` samples.
///
/// A fixed-capacity circular history holds the most recent samples, and the
/// speed is the position delta over the time delta between the newest sample
/// and the oldest retained one. Spanning a window of samples rather than a
/// single adjacent pair smooths the jitter of irregular tick timing, which
/// matters when the tick rate itself is the quantity being measured.
///
/// `update` must be serialized per instance; [`speed`](Self::speed) may be
/// called concurrently from a reporting context and always observes a whole
/// value, possibly one update stale.
pub struct SpeedEstimator {
    positions: [i32; BUFFER_SIZE],
    timestamps: [i64; BUFFER_SIZE],
    /// Free-running write cursor; the next sample lands at `head & INDEX_MASK`.
    head: usize,
    /// Free-running read cursor; the oldest live sample is at `tail & INDEX_MASK`.
    tail: usize,
    window: usize,
    speed: AtomicI32,
}

impl SpeedEstimator {
    /// Creates an estimator seeded with the single sample `(position, t)`.
    ///
    /// `sample_count` is the number of samples the sliding window retains
    /// before evicting the oldest; it is clamped to `1..=BUFFER_SIZE`.
    pub fn new(position: i32, t: Nanos, sample_count: usize) -> Self {
        let mut estimator = SpeedEstimator {
            positions: [0; BUFFER_SIZE],
            timestamps: [0; BUFFER_SIZE],
            head: 0,
            tail: 0,
            window: 0,
            speed: AtomicI32::new(0),
        };
        estimator.reset(position, t, sample_count);
        estimator
    }

    /// Re-seeds the estimator in place, discarding all history.
    ///
    /// Used when the motor changes run mode and the buffered samples no
    /// longer describe its motion. Equivalent to constructing a fresh
    /// estimator with the same arguments.
    pub fn reset(&mut self, position: i32, t: Nanos, sample_count: usize) {
        self.positions[0] = position;
        self.timestamps[0] = t.as_nanos();
        self.tail = 0;
        self.head = 1;
        self.window = sample_count.clamp(1, BUFFER_SIZE);
        self.speed.store(0, Ordering::Relaxed);
    }

    /// Records a new sample and recomputes the speed over the live window.
    ///
    /// The oldest sample is evicted once the window grows beyond the
    /// requested sample count. If no time has elapsed between the oldest
    /// retained sample and `t` (duplicate timestamps, or a window of one),
    /// the previous speed value is held rather than dividing by zero; a
    /// timestamp running backwards is treated the same way.
    pub fn update(&mut self, position: i32, t: Nanos) {
        self.positions[self.head & INDEX_MASK] = position;
        self.timestamps[self.head & INDEX_MASK] = t.as_nanos();
        self.head = self.head.wrapping_add(1);

        while self.head.wrapping_sub(self.tail) > self.window {
            self.tail = self.tail.wrapping_add(1);
        }

        let oldest = self.tail & INDEX_MASK;
        let time_delta = t.as_nanos() - self.timestamps[oldest];
        if time_delta <= 0 {
            return;
        }

        let position_delta = i64::from(position) - i64::from(self.positions[oldest]);
        let speed = div_round_closest(position_delta * NANOS_PER_SEC, time_delta)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        self.speed.store(speed as i32, Ordering::Relaxed);
    }

    /// [`update`](Self::update) with the timestamp taken from `clock`.
    pub fn update_now<C: MonotonicClock>(&mut self, position: i32, clock: &C) {
        self.update(position, clock.now());
    }

    /// Returns the last computed speed in counts per second. Pure read,
    /// O(1), safe against a concurrent in-flight `update`.
    pub fn speed(&self) -> i32 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Number of live samples currently in the window.
    pub fn len(&self) -> usize {
        self.head.wrapping_sub(self.tail)
    }

    /// Always false: the seed sample is retained until the next `reset`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Signed division rounding half away from zero, so forward and reverse
/// rotation round symmetrically. `den` must be positive.
fn div_round_closest(num: i64, den: i64) -> i64 {
    if num >= 0 {
        (num + den / 2) / den
    } else {
        (num - den / 2) / den
    }
}
