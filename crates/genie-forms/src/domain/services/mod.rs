//! Domain services module
//!
//! Stateless logic that spans a whole schema rather than one field:
//! turning a calculator into a renderable booking form, and formatting
//! stored submission data for display.

pub mod formatting;
pub mod renderer;
