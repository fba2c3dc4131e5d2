pub mod columns;
pub mod rows;
pub mod substitute;

pub use columns::*;
pub use rows::*;
pub use substitute::*;
