//! Color domain module.
//!
//! The closest thing this toolbox has to an engine: pure color-space
//! conversions (`space`) and the shared editing state with linear
//! undo/redo and a recent-colors list (`workspace`). The color tools in
//! `domains/tools/definitions/color/` are thin wrappers over this module.

pub mod space;
pub mod workspace;

mod error;

pub use error::ColorError;
pub use space::{Cmyk, Color, Hsl, Rgb};
pub use workspace::{ColorWorkspace, StepOutcome};
