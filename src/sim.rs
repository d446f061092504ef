use nalgebra as na;

/// First-order DC motor speed dynamics with integrated position.
///
/// The state vector is `[position, speed]` in encoder counts and counts per
/// second. A duty input `u` drives the speed toward `gain * u` with the
/// given time constant:
///
/// ```text
/// position' = speed
/// speed'    = (gain * u - speed) / time_constant
/// ```
pub struct DcMotor {
    /// Steady-state speed in counts per second at unit duty.
    pub gain: f64,
    /// Time constant of the speed response, in seconds.
    pub time_constant: f64,
}

impl DcMotor {
    /// Advances the state by `dt` seconds with a forward-Euler step.
    pub fn step(&self, state: na::Vector2<f64>, duty: f64, dt: f64) -> na::Vector2<f64> {
        let accel = (self.gain * duty - state[1]) / self.time_constant;
        na::Vector2::new(state[0] + state[1] * dt, state[1] + accel * dt)
    }

    /// Quantizes the plant position to whole encoder counts, which is what
    /// a tachometer would report.
    pub fn counts(state: &na::Vector2<f64>) -> i32 {
        state[0].round() as i32
    }
}
