pub mod error;
pub mod format;
pub mod interactive;
pub mod output;

pub use error::*;
pub use interactive::*;
pub use output::*;
