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

#[cfg(test)]
#[allow(dead_code)]
pub mod test_control {

    use core::cell::Cell;

    use tacho_motor::pid::PidController;
    use tacho_motor::speed::SpeedEstimator;
    use tacho_motor::time::{MonotonicClock, Nanos};

    /// An estimator seeded at position 0, time 0.
    pub fn make_estimator(sample_count: usize) -> SpeedEstimator {
        SpeedEstimator::new(0, Nanos(0), sample_count)
    }

    /// A pure proportional controller with unit gain.
    pub fn make_p_controller() -> PidController {
        PidController::new(1, 0, 0)
    }

    /// A clock whose reading the test sets by hand.
    pub struct FakeClock(pub Cell<i64>);

    impl FakeClock {
        pub fn new() -> Self {
            FakeClock(Cell::new(0))
        }

        pub fn advance(&self, nanos: i64) {
            self.0.set(self.0.get() + nanos);
        }
    }

    impl MonotonicClock for FakeClock {
        fn now(&self) -> Nanos {
            Nanos(self.0.get())
        }
    }
}
