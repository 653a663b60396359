//! Time-marching driver.
//!
//! Owns the (E, H) field state and advances it with the 5-stage
//! low-storage Runge-Kutta scheme, invoking the spatial discretization's
//! RHS once per stage. The default step size is derived once at
//! construction from the finest node spacing and the unit wave speed of
//! the normalized equations.

use super::lserk4::{RK4A, RK4B};
use crate::solver::{Field1D, SpatialDiscretization};

/// Courant number of the default step-size bound.
const CFL: f64 = 1.0;

/// Explicit time integrator for the Maxwell system.
///
/// The driver is either idle (constructed, time 0, fields at their initial
/// values) or stepping; time only moves forward. Fields are owned
/// exclusively by the driver and are read or written between steps through
/// the accessors.
pub struct MaxwellDriver<'a, S: SpatialDiscretization> {
    sp: &'a S,
    e: Field1D,
    h: Field1D,
    res_e: Field1D,
    res_h: Field1D,
    dt: f64,
    time: f64,
}

impl<'a, S: SpatialDiscretization> MaxwellDriver<'a, S> {
    /// Driver with zero-initialized fields and the CFL-derived step size
    /// dt = CFL · min spacing / 2.
    pub fn new(sp: &'a S) -> Self {
        let (e, h) = sp.build_fields();
        let (res_e, res_h) = sp.build_fields();
        let dt = CFL * sp.min_node_spacing() / 2.0;

        Self {
            sp,
            e,
            h,
            res_e,
            res_h,
            dt,
            time: 0.0,
        }
    }

    /// The internally derived step size.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn e(&self) -> &Field1D {
        &self.e
    }

    pub fn h(&self) -> &Field1D {
        &self.h
    }

    pub fn e_mut(&mut self) -> &mut Field1D {
        &mut self.e
    }

    pub fn h_mut(&mut self) -> &mut Field1D {
        &mut self.h
    }

    /// Named field access: "E" or "H".
    pub fn field(&self, name: &str) -> Option<&Field1D> {
        match name {
            "E" => Some(&self.e),
            "H" => Some(&self.h),
            _ => None,
        }
    }

    /// Named mutable field access: "E" or "H".
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field1D> {
        match name {
            "E" => Some(&mut self.e),
            "H" => Some(&mut self.h),
            _ => None,
        }
    }

    /// Advance one step of size `dt`, or the internal default when `None`.
    /// Time advances by exactly the step size used.
    pub fn step(&mut self, dt: Option<f64>) {
        let dt = dt.unwrap_or(self.dt);

        self.res_e.fill(0.0);
        self.res_h.fill(0.0);

        for stage in 0..RK4A.len() {
            let (rhs_e, rhs_h) = self.sp.compute_rhs(&self.e, &self.h);

            self.res_e.scale(RK4A[stage]);
            self.res_e.axpy(dt, &rhs_e);
            self.res_h.scale(RK4A[stage]);
            self.res_h.axpy(dt, &rhs_h);

            self.e.axpy(RK4B[stage], &self.res_e);
            self.h.axpy(RK4B[stage], &self.res_h);
        }

        self.time += dt;
    }

    /// Step with the default size until `final_time` is reached or passed.
    pub fn run(&mut self, final_time: f64) {
        let n_steps = (final_time / self.dt).ceil() as usize;
        for _ in 0..n_steps {
            self.step(None);
        }
    }

    /// Step once per point of the uniform grid 0, dt, 2·dt, … < final_time.
    pub fn run_until(&mut self, final_time: f64) {
        let mut t = 0.0;
        while t < final_time {
            self.step(None);
            t += self.dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{BoundaryLabel, Mesh1D};
    use crate::solver::{FluxType, Maxwell1D};

    fn discretization(n_elements: usize, order: usize) -> Maxwell1D {
        let mesh = Mesh1D::uniform(0.0, 1.0, n_elements, BoundaryLabel::Pec).unwrap();
        Maxwell1D::new(order, mesh, FluxType::Upwind).unwrap()
    }

    #[test]
    fn test_default_dt_from_mesh_spacing() {
        let sp = discretization(10, 2);
        let driver = MaxwellDriver::new(&sp);
        assert!((driver.dt() - sp.min_node_spacing() / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_field_fixed_point() {
        // Zero initial data with a PEC boundary stays exactly zero.
        let sp = discretization(10, 3);
        let mut driver = MaxwellDriver::new(&sp);

        for _ in 0..50 {
            driver.step(None);
        }
        assert_eq!(driver.e().max_abs(), 0.0);
        assert_eq!(driver.h().max_abs(), 0.0);
    }

    #[test]
    fn test_time_advances_by_step_used() {
        let sp = discretization(10, 2);
        let mut driver = MaxwellDriver::new(&sp);

        driver.step(None);
        assert!((driver.time() - driver.dt()).abs() < 1e-15);

        driver.step(Some(0.25));
        assert!((driver.time() - (driver.dt() + 0.25)).abs() < 1e-15);
    }

    #[test]
    fn test_run_reaches_final_time() {
        let sp = discretization(10, 2);
        let mut driver = MaxwellDriver::new(&sp);
        driver.run(0.5);
        assert!(driver.time() >= 0.5);
        assert!(driver.time() < 0.5 + driver.dt());
    }

    #[test]
    fn test_run_until_walks_the_uniform_grid() {
        // 8 order-1 elements on [0, 1]: dt = 1/16, exactly representable,
        // so the grid arithmetic below is exact.
        let sp = discretization(8, 1);
        assert_eq!(MaxwellDriver::new(&sp).dt(), 0.0625);

        // final_time a multiple of dt: one step per grid point below it.
        let mut driver = MaxwellDriver::new(&sp);
        driver.run_until(0.25);
        assert_eq!(driver.time(), 4.0 * 0.0625);

        // final_time between grid points: steps until the grid passes it.
        let mut driver = MaxwellDriver::new(&sp);
        driver.run_until(0.23);
        assert_eq!(driver.time(), 4.0 * 0.0625);
        assert!(driver.time() >= 0.23);
    }

    #[test]
    fn test_deterministic_trajectories() {
        // Two drivers over identical discretizations produce identical
        // trajectories bit for bit.
        let sp1 = discretization(20, 3);
        let sp2 = discretization(20, 3);
        let mut d1 = MaxwellDriver::new(&sp1);
        let mut d2 = MaxwellDriver::new(&sp2);

        let x1 = sp1.node_coordinates().to_vec();
        d1.e_mut()
            .set_from_function(&x1, |x| (-(x - 0.5) * (x - 0.5) / 0.01).exp());
        d2.e_mut()
            .set_from_function(&x1, |x| (-(x - 0.5) * (x - 0.5) / 0.01).exp());

        for _ in 0..20 {
            d1.step(None);
            d2.step(None);
        }
        assert_eq!(d1.e().data, d2.e().data);
        assert_eq!(d1.h().data, d2.h().data);
    }

    #[test]
    fn test_named_field_access() {
        let sp = discretization(4, 1);
        let mut driver = MaxwellDriver::new(&sp);

        driver.field_mut("E").unwrap().fill(1.0);
        assert_eq!(driver.field("E").unwrap().max_abs(), 1.0);
        assert_eq!(driver.field("H").unwrap().max_abs(), 0.0);
        assert!(driver.field("Ez").is_none());
    }
}
