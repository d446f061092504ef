//! Benchmark for the estimator and controller tick paths
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

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tacho_motor::pid::PidController;
use tacho_motor::speed::SpeedEstimator;
use tacho_motor::time::Nanos;

/// Both update paths are expected to complete in low tens of nanoseconds;
/// they run inside a hard-real-time tick handler in the driver.
fn bench_speed_update(c: &mut Criterion) {
    let mut est = SpeedEstimator::new(0, Nanos(0), 64);
    let mut position = 0i32;
    let mut t = 0i64;
    c.bench_function("speed_estimator_update", |b| {
        b.iter(|| {
            position = position.wrapping_add(3);
            t += 1_000_000;
            est.update(black_box(position), Nanos(black_box(t)));
            black_box(est.speed())
        })
    });
}

fn bench_pid_update(c: &mut Criterion) {
    let mut pid = PidController::new(3, 1, 1);
    pid.set_setpoint(1_000);
    let mut measured = 0;
    c.bench_function("pid_update", |b| {
        b.iter(|| {
            measured = (measured + 7) % 2_000;
            black_box(pid.update(black_box(measured)))
        })
    });
}

criterion_group!(benches, bench_speed_update, bench_pid_update);
criterion_main!(benches);
