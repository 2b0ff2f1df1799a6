pub mod carousel;
pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod field;
pub mod graph;
pub mod lifecycle;
pub mod link;
pub mod particle;
pub mod pointer;
pub mod random;
pub mod surface;

pub use carousel::*;
pub use catalog::*;
pub use color::*;
pub use config::*;
pub use contact::*;
pub use error::*;
pub use field::*;
pub use graph::*;
pub use lifecycle::*;
pub use link::*;
pub use particle::*;
pub use pointer::*;
pub use random::Span;
pub use surface::*;
