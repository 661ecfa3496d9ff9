// Reusable TUI components
//
// Builders (`tabs`, `section`) are pure and unit-tested; render functions
// (`title_bar`, `status_bar`) draw directly into the frame.

pub mod section;
pub mod status_bar;
pub mod tabs;
pub mod title_bar;

pub use section::{build_section, RenderCtx};
pub use tabs::build_tabs;
