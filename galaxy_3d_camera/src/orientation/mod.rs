//! Orientation module: rigid-body poses and change notification.
//!
//! `Orientation` is plain data plus math. `Oriented` is implemented by the
//! entities that own one (cameras, and anything else that needs to hear
//! about position/rotation changes).

mod orientation;
mod oriented;

pub use orientation::{ChangeType, Orientation};
pub use oriented::Oriented;
