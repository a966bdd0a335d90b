//! Pure data structures shared by the settings flows.

pub mod event;
pub mod location;
pub mod staff;
pub mod user;

pub use event::*;
pub use location::*;
pub use staff::*;
pub use user::*;
