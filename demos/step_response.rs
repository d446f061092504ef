//! Step response of a simulated DC motor under closed-loop speed control.
//! This example requires the `--features simulation` flag to be enabled.
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

use nalgebra as na;

use tacho_motor::pid::PidController;
use tacho_motor::sim::DcMotor;
use tacho_motor::speed::SpeedEstimator;
use tacho_motor::time::Nanos;

const DT: f64 = 0.001;
const DT_NANOS: i64 = 1_000_000;
const DUTY_SCALE: f64 = 65536.0;

pub fn main() {
    let motor = DcMotor {
        gain: 20_000.0,
        time_constant: 0.02,
    };
    let mut state = na::Vector2::new(0.0, 0.0);
    let mut est = SpeedEstimator::new(0, Nanos(0), 4);

    let mut pid = PidController::new(8, 1, 0);
    pid.set_setpoint(5_000);

    println!("{:>8} {:>10} {:>12} {:>8}", "t [ms]", "setpoint", "speed [c/s]", "duty");

    let mut t = 0;
    let mut duty = 0.0;
    for tick in 0..500 {
        state = motor.step(state, duty, DT);
        t += DT_NANOS;
        est.update(DcMotor::counts(&state), Nanos(t));

        let raw = pid.update(est.speed());
        duty = (f64::from(raw) / DUTY_SCALE).clamp(0.0, 1.0);
        pid.set_overloaded(f64::from(raw) / DUTY_SCALE != duty);

        if tick % 20 == 0 {
            println!(
                "{:>8} {:>10} {:>12} {:>8.3}",
                t / DT_NANOS,
                pid.setpoint(),
                est.speed(),
                duty
            );
        }
    }
}
