// Presentation: turns the analysis view state into the HTML page.
// Pure functions of the view model; no state of its own beyond the stylesheet installed at startup.

pub mod format;
pub mod page;
pub mod styles;

pub use page::IndexPage;
pub use styles::{install_stylesheet, stylesheet};
