//! Point probes for sampling a field during a run.

use crate::solver::Field1D;

/// Records the value of one nodal degree of freedom over time.
#[derive(Clone, Debug)]
pub struct Probe {
    /// Element containing the probe
    pub element: usize,
    /// Local node index inside the element
    pub node: usize,
    /// Sampled values, one per call to [`Probe::record`]
    pub samples: Vec<f64>,
}

impl Probe {
    pub fn new(element: usize, node: usize) -> Self {
        Self {
            element,
            node,
            samples: Vec::new(),
        }
    }

    /// Append the current value of `field` at the probe location.
    pub fn record(&mut self, field: &Field1D) {
        self.samples.push(field.at(self.element, self.node));
    }
}
