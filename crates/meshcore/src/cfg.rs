//! Build configuration and fixed tolerances.
//!
//! Policy
//! - Numeric thresholds are constants; only behavior toggles live in
//!   `TopologyCfg`. Call sites that do not care use `Default`.

/// Strict lower bound for the ring-ordering triple product `n · (v1 × v2)`.
pub const ORIENT_EPS: f64 = 0.0;

/// Topology rebuild options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopologyCfg {
    /// Sort each vertex's neighbor slice into rotational order.
    pub orient_rings: bool,
    /// Run `topology::validate` after every rebuild and log violations.
    pub validate: bool,
}

impl Default for TopologyCfg {
    fn default() -> Self {
        Self {
            orient_rings: true,
            validate: cfg!(debug_assertions),
        }
    }
}
