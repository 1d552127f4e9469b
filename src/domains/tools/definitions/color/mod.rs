//! Color tools: conversion plus the stateful workspace operations.

pub mod convert;
pub mod recent;
pub mod redo;
pub mod set;
pub mod transform;
pub mod undo;

pub use convert::ColorConvertTool;
pub use recent::ColorRecentTool;
pub use redo::ColorRedoTool;
pub use set::ColorSetTool;
pub use transform::ColorTransformTool;
pub use undo::ColorUndoTool;
