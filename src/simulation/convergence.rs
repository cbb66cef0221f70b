//! Local stability test on one step's displacements

use super::states::NVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceMonitor {
    pub tolerance: f64,
}

impl ConvergenceMonitor {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Largest `|new - old|` over index-aligned position arrays
    pub fn max_displacement(old: &[NVec3], new: &[NVec3]) -> f64 {
        debug_assert_eq!(old.len(), new.len());
        old.iter()
            .zip(new.iter())
            .map(|(o, n)| (n - o).norm())
            .fold(0.0, f64::max)
    }

    /// Every point moved strictly less than `tolerance` this step
    pub fn is_converged(&self, old: &[NVec3], new: &[NVec3]) -> bool {
        Self::max_displacement(old, new) < self.tolerance
    }
}
