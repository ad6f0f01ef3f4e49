//! Indicator/action selection form: slots, vocabularies, transitions and the
//! request payload derived from them.

pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use events::*;
pub use services::*;
pub use value_objects::*;
