pub mod constants;
pub mod manifest;
pub mod mural;
pub mod parallax;
pub mod particles;
pub mod registry;

pub use constants::*;
pub use manifest::*;
pub use mural::*;
pub use parallax::*;
pub use particles::*;
pub use registry::*;
