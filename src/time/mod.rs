//! Time integration: LSERK4 tableau and the Maxwell driver.

mod driver;
mod lserk4;

pub use driver::MaxwellDriver;
pub use lserk4::{RK4A, RK4B, RK4C};
