// Types representing tracked quantities

mod error;
mod token;

// Re-export all public symbols
pub use error::*;
pub use token::*;
