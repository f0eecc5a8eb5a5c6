pub mod consumable;
pub mod option;

pub use consumable::*;
pub use option::*;
