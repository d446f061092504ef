use core::sync::atomic::{AtomicBool, Ordering};

use num_traits::{PrimInt, SaturatingMul, Signed};

/// The signed primitive integers the controller can work in.
///
/// Blanket-implemented; callers never implement this themselves. `i32` is
/// the default and matches the width of encoder counts elsewhere in the
/// crate. Wider types push out the point where the integral term saturates
/// on long-running high-error conditions.
pub trait PidInt: PrimInt + Signed + SaturatingMul {}

impl<T: PrimInt + Signed + SaturatingMul> PidInt for T {}

/// Names the externally tunable fields of a [`PidController`].
///
/// A driver exposing gains and the setpoint through an attribute table can
/// bind each entry to one of these and route every read and write through
/// [`PidController::field`] and [`PidController::set_field`], instead of
/// wiring one accessor pair per attribute by hand.
///
/// ```rust
/// use tacho_motor::pid::{PidController, PidField};
///
/// const ATTRS: [(&str, PidField); 4] = [
///     ("speed_sp", PidField::Setpoint),
///     ("speed_Kp", PidField::Kp),
///     ("speed_Ki", PidField::Ki),
///     ("speed_Kd", PidField::Kd),
/// ];
///
/// let mut pid = PidController::new(1, 0, 0);
/// for (name, field) in ATTRS {
///     if name == "speed_Kp" {
///         pid.set_field(field, 120);
///     }
/// }
/// assert_eq!(pid.kp(), 120);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PidField {
    /// The target value the controller regulates toward.
    Setpoint,
    /// The proportional gain coefficient.
    Kp,
    /// The integral gain coefficient.
    Ki,
    /// The derivative gain coefficient.
    Kd,
}

/// An integer PID controller with caller-driven anti-windup.
///
/// [`update`](Self::update) produces a raw, unclamped output; the caller is
/// responsible for clamping it to the actuator limits and for reporting back
/// through [`set_overloaded`](Self::set_overloaded) when clamping changed
/// it. While the overload flag is set the integral term is held, so it
/// cannot wind up during the time the actuator is unable to follow the
/// command. The controller never detects saturation itself because the
/// limit is actuator-specific and unknown here.
///
/// All arithmetic saturates at the limits of `T`, so a long-running large
/// error degrades into a pegged output instead of wrapping around.
///
/// Gains are plain integers in whatever fixed-point scale the caller's
/// parameter convention defines; setters store the value given with no
/// validation.
#[derive(Debug)]
pub struct PidController<T = i32> {
    setpoint: T,
    kp: T,
    ki: T,
    kd: T,
    integral: T,
    prev_error: T,
    overloaded: AtomicBool,
}

impl<T: PidInt> PidController<T> {
    /// Creates a controller with the given gains. The setpoint and all
    /// dynamic state start at zero; the overload flag starts clear.
    pub fn new(kp: T, ki: T, kd: T) -> Self {
        PidController {
            setpoint: T::zero(),
            kp,
            ki,
            kd,
            integral: T::zero(),
            prev_error: T::zero(),
            overloaded: AtomicBool::new(false),
        }
    }

    /// Zeroes the integral and derivative state and clears the overload
    /// flag, keeping gains and setpoint.
    ///
    /// Call this when a motor stops and restarts a run without changing its
    /// target; a stale integral from the previous run would otherwise kick
    /// the actuator on the first tick.
    pub fn reset(&mut self) {
        self.integral = T::zero();
        self.prev_error = T::zero();
        self.overloaded.store(false, Ordering::Relaxed);
    }

    /// Runs one control step against `measured` and returns the raw output.
    ///
    /// The output is the plain sum of the proportional, integral, and
    /// derivative terms, before any actuator limit. The error accumulates
    /// into the integral unless the overload flag is set, in which case the
    /// integral holds its value (anti-windup).
    pub fn update(&mut self, measured: T) -> T {
        let error = self.setpoint.saturating_sub(measured);

        if !self.is_overloaded() {
            self.integral = self.integral.saturating_add(error);
        }

        let p_term = self.kp.saturating_mul(&error);
        let i_term = self.ki.saturating_mul(&self.integral);
        let d_term = self
            .kd
            .saturating_mul(&error.saturating_sub(self.prev_error));
        self.prev_error = error;

        p_term.saturating_add(i_term).saturating_add(d_term)
    }

    /// Whether the caller has reported the output as saturated. Pure read,
    /// safe against a concurrent in-flight `update`.
    pub fn is_overloaded(&self) -> bool {
        self.overloaded.load(Ordering::Relaxed)
    }

    /// Records whether clamping the raw output against the actuator limit
    /// changed it on the current cycle.
    pub fn set_overloaded(&mut self, overloaded: bool) {
        self.overloaded.store(overloaded, Ordering::Relaxed);
    }

    /// Returns the setpoint.
    pub fn setpoint(&self) -> T {
        self.setpoint
    }

    /// Sets the setpoint.
    pub fn set_setpoint(&mut self, setpoint: T) {
        self.setpoint = setpoint;
    }

    /// Returns the proportional gain.
    pub fn kp(&self) -> T {
        self.kp
    }

    /// Sets the proportional gain.
    pub fn set_kp(&mut self, kp: T) {
        self.kp = kp;
    }

    /// Returns the integral gain.
    pub fn ki(&self) -> T {
        self.ki
    }

    /// Sets the integral gain.
    pub fn set_ki(&mut self, ki: T) {
        self.ki = ki;
    }

    /// Returns the derivative gain.
    pub fn kd(&self) -> T {
        self.kd
    }

    /// Sets the derivative gain.
    pub fn set_kd(&mut self, kd: T) {
        self.kd = kd;
    }

    /// Reads the field named by `field`. See [`PidField`] for the intended
    /// attribute-table wiring.
    pub fn field(&self, field: PidField) -> T {
        match field {
            PidField::Setpoint => self.setpoint,
            PidField::Kp => self.kp,
            PidField::Ki => self.ki,
            PidField::Kd => self.kd,
        }
    }

    /// Writes the field named by `field`. Stores the value given; no
    /// validation is performed.
    pub fn set_field(&mut self, field: PidField, value: T) {
        match field {
            PidField::Setpoint => self.setpoint = value,
            PidField::Kp => self.kp = value,
            PidField::Ki => self.ki = value,
            PidField::Kd => self.kd = value,
        }
    }
}
