//! Location and staff list management, gated on the manager role.

pub mod entity;
pub mod error;
pub mod flow;

pub use entity::*;
pub use error::*;
pub use flow::*;
