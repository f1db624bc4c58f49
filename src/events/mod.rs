mod controls;
mod labels;
mod pointer;

pub use controls::wire_controls;
pub use labels::wire_label_handlers;
pub use pointer::{wire_pointer_handlers, PointerWiring};
