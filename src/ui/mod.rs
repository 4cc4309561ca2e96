pub mod field;
pub mod render;

pub use field::{compute_field_grid, take_frame};
pub use render::{draw_ui, hud_line};
