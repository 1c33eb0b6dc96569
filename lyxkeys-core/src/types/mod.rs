pub mod key;
pub mod sequence;
pub mod action;
pub mod table;

pub use key::*;
pub use sequence::*;
pub use action::*;
pub use table::*;
