// Quantity formatting

mod formatter;

// Re-export all public symbols
pub use formatter::*;
