//! Dielectric-slab transmission benchmark.
//!
//! A Gaussian pulse hits a thin lossy slab embedded in a 1D free-space
//! domain with absorbing ends. Reflection and transmission spectra are
//! extracted from point probes by DFT and compared against the closed-form
//! transmission-line solution for a single homogeneous slab.

use maxwell_dg::{
    dft_magnitudes, log_frequencies, BoundaryLabel, FluxType, MaterialProperties, Maxwell1D,
    MaxwellDriver, Mesh1D, Probe,
};
use std::f64::consts::PI;

const C0: f64 = 299_792_458.0;
const MU_0: f64 = 4.0 * PI * 1e-7;
const EPS_0: f64 = 8.854_187_817e-12;

/// Minimal complex arithmetic for the analytic slab solution.
#[derive(Clone, Copy)]
struct Cx {
    re: f64,
    im: f64,
}

impl Cx {
    fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    fn add(self, o: Cx) -> Cx {
        Cx::new(self.re + o.re, self.im + o.im)
    }

    fn sub(self, o: Cx) -> Cx {
        Cx::new(self.re - o.re, self.im - o.im)
    }

    fn mul(self, o: Cx) -> Cx {
        Cx::new(
            self.re * o.re - self.im * o.im,
            self.re * o.im + self.im * o.re,
        )
    }

    fn div(self, o: Cx) -> Cx {
        let d = o.re * o.re + o.im * o.im;
        Cx::new(
            (self.re * o.re + self.im * o.im) / d,
            (self.im * o.re - self.re * o.im) / d,
        )
    }

    fn sqrt(self) -> Cx {
        let r = self.abs().sqrt();
        let theta = self.im.atan2(self.re) / 2.0;
        Cx::new(r * theta.cos(), r * theta.sin())
    }

    fn exp(self) -> Cx {
        let r = self.re.exp();
        Cx::new(r * self.im.cos(), r * self.im.sin())
    }

    fn abs(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    fn scale(self, c: f64) -> Cx {
        Cx::new(self.re * c, self.im * c)
    }
}

/// Closed-form |S11| and |S21| in dB of an air / lossy-slab / air stack.
///
/// Time convention e^{+jωt}; the slab has relative permittivity `eps_r`,
/// resistivity `rho` (Ω·m), unit permeability, and thickness `d` meters.
fn slab_reference_db(freqs: &[f64], eps_r: f64, rho: f64, d: f64) -> (Vec<f64>, Vec<f64>) {
    let one = Cx::new(1.0, 0.0);
    let mut r_db = Vec::with_capacity(freqs.len());
    let mut t_db = Vec::with_capacity(freqs.len());

    for &f in freqs {
        let omega = 2.0 * PI * f;
        // ε_c = ε_r - j σ/(ω ε₀)
        let eps_c = Cx::new(eps_r, -(1.0 / rho) / (omega * EPS_0));
        let n2 = eps_c.sqrt();

        // Fresnel coefficient at the air/slab interface, Z₂/Z₀ = 1/n₂:
        // r₁₂ = (Z₂ - Z₀)/(Z₂ + Z₀) = (1 - n₂)/(1 + n₂)
        let r12 = one.sub(n2).div(one.add(n2));
        let r12_sq = r12.mul(r12);

        // Propagation factor e^{-j k₂ d}
        let phase = Cx::new(0.0, -omega / C0 * d).mul(n2).exp();
        let phase_sq = phase.mul(phase);

        let denom = one.sub(r12_sq.mul(phase_sq));
        let refl = r12.mul(one.sub(phase_sq)).div(denom);
        let trans = one.sub(r12_sq).mul(phase).div(denom);

        r_db.push(20.0 * refl.abs().log10());
        t_db.push(20.0 * trans.abs().log10());
    }

    (r_db, t_db)
}

/// Run the DGTD slab scenario and return (reflection dB, transmission dB)
/// over the given frequency sweep. `slab` is the element range occupied by
/// the slab material; with 100 elements on [0, 1] m each element is 1 cm.
fn run_slab_scenario(
    eps_r: f64,
    rho: f64,
    slab: std::ops::Range<usize>,
    freqs: &[f64],
) -> (Vec<f64>, Vec<f64>) {
    let z_0 = (MU_0 / EPS_0).sqrt();
    let n_elements = 100;

    // Uniform free space except the slab elements.
    let mut epsilon = vec![1.0; n_elements];
    let mut sigma = vec![0.0; n_elements];
    for k in slab {
        epsilon[k] = eps_r;
        sigma[k] = z_0 / rho;
    }

    let mesh = Mesh1D::uniform(0.0, 1.0, n_elements, BoundaryLabel::Sma).unwrap();
    let materials = MaterialProperties::vacuum(n_elements)
        .with_epsilon(epsilon)
        .with_sigma(sigma);
    let sp = Maxwell1D::with_materials(3, mesh, FluxType::Upwind, materials).unwrap();
    let mut driver = MaxwellDriver::new(&sp);

    // Rightward-travelling Gaussian pulse left of the slab.
    let s0 = 0.025;
    let x0 = 0.25;
    let pulse = move |x: f64| (-(x - x0) * (x - x0) / (2.0 * s0 * s0)).exp();
    let x = sp.node_coordinates().to_vec();
    driver.e_mut().set_from_function(&x, pulse);
    driver.h_mut().set_from_function(&x, pulse);

    let final_time = 4.0;
    let dt = driver.dt();
    let steps = (final_time / dt).ceil() as usize;

    // Reflection probe upstream of the slab, transmission probe downstream.
    let mut probe_r = Probe::new(5, 3);
    let mut probe_t = Probe::new(60, 3);
    let mut times = Vec::with_capacity(steps);

    for _ in 0..steps {
        driver.step(None);
        probe_r.record(driver.e());
        probe_t.record(driver.e());
        times.push(driver.time());
    }

    // Incident-pulse reference trace: the same Gaussian as a function of
    // time (a pure time shift, so the spectral magnitude is unchanged).
    let incident: Vec<f64> = times
        .iter()
        .map(|&t| (-(t - x0) * (t - x0) / (2.0 * s0 * s0)).exp())
        .collect();

    // The mesh is 1 m in normalized units; rescale time to seconds.
    let times_s: Vec<f64> = times.iter().map(|&t| t / C0).collect();

    let spec_r = dft_magnitudes(&probe_r.samples, &times_s, freqs);
    let spec_t = dft_magnitudes(&probe_t.samples, &times_s, freqs);
    let spec_0 = dft_magnitudes(&incident, &times_s, freqs);

    let r_db: Vec<f64> = spec_r
        .iter()
        .zip(&spec_0)
        .map(|(&r, &i)| 20.0 * (r / i).log10())
        .collect();
    let t_db: Vec<f64> = spec_t
        .iter()
        .zip(&spec_0)
        .map(|(&t, &i)| 20.0 * (t / i).log10())
        .collect();

    (r_db, t_db)
}

fn assert_matches_reference(eps_r: f64, rho: f64, slab: std::ops::Range<usize>) {
    let freqs = log_frequencies(8.0, 9.0, 301);

    // Slab thickness in meters follows from the element count.
    let d = 0.01 * slab.len() as f64;
    let (r_db, t_db) = run_slab_scenario(eps_r, rho, slab, &freqs);
    let (r_ref, t_ref) = slab_reference_db(&freqs, eps_r, rho, d);

    // Tolerance: 1% of the largest |R + T| level across the sweep.
    let atol = r_db
        .iter()
        .zip(&t_db)
        .map(|(&r, &t)| (r + t).abs())
        .fold(0.0, f64::max)
        * 1e-2;

    for (i, &f) in freqs.iter().enumerate() {
        assert!(
            (r_db[i] - r_ref[i]).abs() <= atol,
            "reflection deviates at {:.3e} Hz: {} dB vs {} dB (atol {})",
            f,
            r_db[i],
            r_ref[i],
            atol
        );
        assert!(
            (t_db[i] - t_ref[i]).abs() <= atol,
            "transmission deviates at {:.3e} Hz: {} dB vs {} dB (atol {})",
            f,
            t_db[i],
            t_ref[i],
            atol
        );
    }
}

#[test]
fn test_slab_eps50_rho1_1cm() {
    assert_matches_reference(50.0, 1.0, 49..50);
}

#[test]
fn test_slab_eps20_rho5_6cm() {
    assert_matches_reference(20.0, 5.0, 47..53);
}

#[test]
fn test_slab_eps6_rho8_6cm() {
    assert_matches_reference(6.0, 8.0, 47..53);
}
