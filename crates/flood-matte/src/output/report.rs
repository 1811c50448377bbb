use crate::color::Tolerance;
use crate::fill::Connectivity;

/// Summary of one fill-and-rewrite run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub width: u32,
    pub height: u32,
    /// Distinct corner seeds (fewer than 4 on thin grids, 0 on empty ones).
    pub seeds: usize,
    /// Pixels rewritten to transparent, seeds included.
    pub cleared: usize,
    pub tolerance: Tolerance,
    pub connectivity: Connectivity,
}

impl FillReport {
    /// Pixels left as they were.
    #[inline]
    pub fn preserved(&self) -> usize {
        (self.width as usize * self.height as usize).saturating_sub(self.cleared)
    }
}
