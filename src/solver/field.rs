//! Nodal field storage.

/// One field component over the whole mesh.
///
/// Stores nodal values contiguously, element-major: `data[k * n_nodes + i]`
/// is node i of element k. The logical shape is
/// [nodes per element, number of elements].
#[derive(Clone, Debug, PartialEq)]
pub struct Field1D {
    /// Nodal values
    pub data: Vec<f64>,
    /// Number of elements
    pub n_elements: usize,
    /// Nodes per element
    pub n_nodes: usize,
}

impl Field1D {
    /// Zero-initialized field.
    pub fn new(n_elements: usize, n_nodes: usize) -> Self {
        Self {
            data: vec![0.0; n_elements * n_nodes],
            n_elements,
            n_nodes,
        }
    }

    /// Nodal values of element k.
    pub fn element(&self, k: usize) -> &[f64] {
        let start = k * self.n_nodes;
        &self.data[start..start + self.n_nodes]
    }

    /// Mutable nodal values of element k.
    pub fn element_mut(&mut self, k: usize) -> &mut [f64] {
        let start = k * self.n_nodes;
        &mut self.data[start..start + self.n_nodes]
    }

    /// Value at node i of element k.
    pub fn at(&self, k: usize, i: usize) -> f64 {
        self.data[k * self.n_nodes + i]
    }

    /// Fill from a function of the physical coordinate. `x` is the
    /// element-major node coordinate array of the discretization.
    pub fn set_from_function<F>(&mut self, x: &[f64], f: F)
    where
        F: Fn(f64) -> f64,
    {
        assert_eq!(x.len(), self.data.len());
        for (v, &xi) in self.data.iter_mut().zip(x) {
            *v = f(xi);
        }
    }

    /// Set every value to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Multiply all values by `c`.
    pub fn scale(&mut self, c: f64) {
        for v in &mut self.data {
            *v *= c;
        }
    }

    /// self <- self + c · other.
    pub fn axpy(&mut self, c: f64, other: &Field1D) {
        assert_eq!(self.data.len(), other.data.len());
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += c * *b;
        }
    }

    /// Largest absolute nodal value.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().map(|&v| v.abs()).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_layout() {
        let mut f = Field1D::new(3, 4);
        assert_eq!(f.data.len(), 12);

        f.element_mut(1)[2] = 5.0;
        assert_eq!(f.data[6], 5.0);
        assert_eq!(f.at(1, 2), 5.0);
    }

    #[test]
    fn test_axpy_and_scale() {
        let mut a = Field1D::new(2, 2);
        let mut b = Field1D::new(2, 2);
        a.fill(1.0);
        b.fill(2.0);

        a.axpy(0.5, &b);
        assert!(a.data.iter().all(|&v| (v - 2.0).abs() < 1e-15));

        a.scale(-3.0);
        assert!((a.max_abs() - 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_set_from_function() {
        let mut f = Field1D::new(2, 2);
        let x = [0.0, 1.0, 1.0, 2.0];
        f.set_from_function(&x, |x| x * x);
        assert_eq!(f.data, vec![0.0, 1.0, 1.0, 4.0]);
    }
}
