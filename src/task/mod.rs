//! Task data model: the task entity, its lifecycle status, and the ordered
//! set a processing run operates on.

pub mod set;
pub mod types;


pub use set::*;
pub use types::*;
