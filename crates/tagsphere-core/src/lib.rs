//! Core of the tag sphere: layout, rotation, motion and projection.
//!
//! Nothing here touches a platform API. The web frontend implements
//! [`Surface`] over DOM elements and feeds pointer events into an
//! [`InputQueue`]; tests do the same with in-memory doubles.

pub mod animation;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod input;
pub mod label;
pub mod layout;
pub mod motion;
pub mod palette;
pub mod rotation;
pub mod scene;
pub mod surface;

pub use animation::*;
pub use config::*;
pub use data::*;
pub use error::*;
pub use input::*;
pub use label::*;
pub use motion::*;
pub use palette::*;
pub use rotation::*;
pub use scene::*;
pub use surface::*;
