//! Market data returned by the backend: analysis snapshots and polled quotes.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
