//! Pure data structures: the order record, its embedded dishes, and the
//! payload shapes accepted on the wire.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
