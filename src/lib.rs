#![warn(missing_docs)]

//! # Tacho Motor Control Primitives
//!
//! This library provides the two estimation/control primitives at the heart of
//! a driver for tachometer-equipped DC motors: a sliding-window speed
//! estimator and an integer PID controller with caller-driven anti-windup.
//!
//! ## Features
//!
//! - Built for the hard-real-time tick handler of a motor driver:
//!   - Every operation is O(1), allocation-free, and non-blocking.
//!   - Fixed-capacity circular sample history with power-of-two masking.
//!   - All controller arithmetic saturates instead of wrapping.
//!
//! - Concurrency-aware reporting reads:
//!   - `update` must be serialized per instance, but the speed value and
//!     the overload flag are single atomic words that may be read from
//!     another context without locking.
//!
//! - Pure integer math:
//!   - Positions are encoder counts, timestamps are monotonic nanoseconds,
//!     speeds are counts per second. No unit conversion happens here; that
//!     is the owning driver's business.
//!
//! ## Usage
//!
//! ### Speed estimation
//!
//! Feed the estimator a `(position, timestamp)` sample on every tachometer
//! tick and read back a speed smoothed over the requested sample window.
//!
//! ```rust
//! use tacho_motor::speed::SpeedEstimator;
//! use tacho_motor::time::Nanos;
//!
//! // Seed at position 0, time 0, smoothing over a window of 4 samples
//! let mut speed = SpeedEstimator::new(0, Nanos(0), 4);
//!
//! speed.update(10, Nanos::from_micros(1));
//! speed.update(20, Nanos::from_micros(2));
//!
//! // 20 counts over 2 us is 10 million counts per second
//! assert_eq!(speed.speed(), 10_000_000);
//! ```
//!
//! ### PID control
//!
//! The controller returns a raw, unclamped output. The caller clamps it to
//! the actuator range and reports back whether clamping changed it, which
//! holds the integral term while the actuator is saturated.
//!
//! ```rust
//! use tacho_motor::pid::PidController;
//!
//! let mut pid = PidController::new(1, 0, 0);
//! pid.set_setpoint(10);
//!
//! let raw = pid.update(7);
//! assert_eq!(raw, 3);
//!
//! let duty = raw.clamp(-100, 100);
//! pid.set_overloaded(duty != raw);
//! assert!(!pid.is_overloaded());
//! ```
//!
//! ### Plugging in your clock
//!
//! `update_now` stamps a sample off any monotonic clock the platform
//! provides.
//!
//! ```rust
//! use tacho_motor::speed::SpeedEstimator;
//! use tacho_motor::time::{MonotonicClock, Nanos};
//!
//! struct TickCounter(i64);
//!
//! impl MonotonicClock for TickCounter {
//!     fn now(&self) -> Nanos {
//!         Nanos(self.0)
//!     }
//! }
//!
//! let clock = TickCounter(1_000);
//! let mut speed = SpeedEstimator::new(0, Nanos(0), 4);
//! speed.update_now(10, &clock);
//!
//! assert_eq!(speed.speed(), 10_000_000);
//! ```
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// Sliding-window speed estimation from (position, timestamp) samples.
pub mod speed;

/// The PID controller and its externally tunable parameter table.
pub mod pid;

/// The module containing time-related utilities feeding the estimator.
pub mod time;

#[doc(hidden)]
#[cfg(feature = "simulation")]
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
