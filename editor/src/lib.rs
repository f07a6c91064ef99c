pub mod cursor;
pub mod machine;

pub use cursor::{Cursor, EditError, Position};
pub use machine::Machine;
