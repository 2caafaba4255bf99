pub mod input;
pub mod legend;
pub mod tooltip;
