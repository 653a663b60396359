//! Low-storage explicit Runge-Kutta coefficients.
//!
//! The classic 5-stage, 4th-order low-storage scheme of Carpenter and
//! Kennedy. One residual accumulator per field replaces the full set of
//! stage derivatives:
//!
//! res <- a_s · res + dt · L(q),   q <- q + b_s · res
//!
//! for stages s = 0..5. The c coefficients give the stage times for
//! time-dependent forcing; the RHS here is autonomous but they are kept
//! with the tableau.

/// Residual recurrence coefficients a_s (a_0 = 0 resets the accumulator).
pub const RK4A: [f64; 5] = [
    0.0,
    -0.417890474499852,
    -1.19215169464268,
    -1.69778469247153,
    -1.51418344425716,
];

/// Update coefficients b_s.
pub const RK4B: [f64; 5] = [
    0.149659021999229,
    0.379210312999627,
    0.822955029386982,
    0.699450455949122,
    0.153057247968152,
];

/// Stage-time fractions c_s.
pub const RK4C: [f64; 5] = [
    0.0,
    0.149659021999229,
    0.370400957364205,
    0.622255763134443,
    0.958282130674690,
];
