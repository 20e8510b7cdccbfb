//! Colors, style toggles and the per-category [`StyleSpec`].

mod color;
mod spec;

pub use color::{BuiltinColors, ColorRegistry, TextColor};
pub use spec::{StyleSpec, TextStyle};
