//! # Washroom Theme
//!
//! Typed rendition of the styling/build configuration consumed by the CSS
//! build tool. The configuration has no runtime behavior of its own; this
//! crate only constructs, validates, and serializes it (plus a CSS
//! custom-property rendering for components that want the palette at
//! runtime).

pub mod color;
pub mod config;
pub mod error;

pub use color::ColorRamp;
pub use config::{DarkMode, ThemeConfig};
pub use error::{Result, ThemeError};
