//! Controller layer: widget input application and navigation orchestration.

pub mod events;
pub mod navigation;
pub mod orchestration;
