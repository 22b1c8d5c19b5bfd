mod book_repr;
mod creation;
mod quering;
pub use book_repr::*;
pub use creation::*;
pub use quering::*;
