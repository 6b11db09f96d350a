//! Tolerances and tessellation heuristics.
//!
//! Policy
//! - Defaults are fixed constants so call sites do not juggle epsilons.
//!   Callers that need different behavior construct a config explicitly.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// `|det| <= eps_det` is treated as singular by `Mat2d::try_invert_eps`.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_det: 1e-12 }
    }
}

/// Stroke tessellation heuristics, all relative to the stroke thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeCfg {
    /// Two consecutive segments no longer than `merge_ratio * thickness` are merged.
    pub merge_ratio: f64,
    /// A previous segment shorter than `bevel_ratio * thickness` is joined with a bevel.
    pub bevel_ratio: f64,
    /// Miter length limit as a multiple of the thickness.
    pub miter_limit_ratio: f64,
}

impl Default for StrokeCfg {
    fn default() -> Self {
        Self {
            merge_ratio: 0.5,
            bevel_ratio: 0.125,
            miter_limit_ratio: 1.0,
        }
    }
}

/// Line width used when computing polygon border miters.
pub(crate) const MESH_MITER_WIDTH: f64 = 1.0;
/// Miter limit used when computing polygon border miters.
pub(crate) const MESH_MITER_LIMIT: f64 = 3.0;
/// Near clipping plane of the camera projection.
pub(crate) const CAMERA_NEAR: f64 = 0.1;
/// Far clipping plane of the camera projection.
pub(crate) const CAMERA_FAR: f64 = 10.0;
