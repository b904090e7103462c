//! Shared effect magnitudes used across every catalog.

/// A large skill gain.
pub const GAIN_MAJOR: f64 = 4.0;
/// A skill gain.
pub const GAIN: f64 = 3.0;
/// A small skill gain.
pub const GAIN_MINOR: f64 = 1.5;
/// A slight skill gain.
pub const GAIN_SLIGHT: f64 = 1.0;

// Losses are negative deltas. An event described as a decrease lowers the
// skill through `Student::regress` (scaled by learning rate, floored at 0);
// it never raises it.

/// A large skill loss.
pub const LOSS_MAJOR: f64 = -4.0;
/// A skill loss.
pub const LOSS: f64 = -3.0;
/// A small skill loss.
pub const LOSS_MINOR: f64 = -1.0;
/// A slight skill loss.
pub const LOSS_SLIGHT: f64 = -0.5;

/// A large stress increase.
pub const STRESS_UP_MAJOR: f64 = 15.0;
/// A stress increase.
pub const STRESS_UP: f64 = 8.0;
/// A small stress increase.
pub const STRESS_UP_MINOR: f64 = 3.0;
/// A large stress relief.
pub const STRESS_DOWN_MAJOR: f64 = -15.0;
/// A stress relief.
pub const STRESS_DOWN: f64 = -8.0;
/// A small stress relief.
pub const STRESS_DOWN_MINOR: f64 = -3.0;
