pub mod errors;
pub mod inspect;

pub use errors::*;
pub use inspect::*;
