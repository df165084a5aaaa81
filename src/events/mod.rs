pub mod drag;
pub mod pointer;

pub use drag::wire_tile_drag;
pub use pointer::wire_field_pointer;
