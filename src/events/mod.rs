pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape;
pub use pointer::{wire_field_handlers, FieldWiring};
