pub mod encrypt;
pub mod keygen;

pub use encrypt::*;
pub use keygen::*;
