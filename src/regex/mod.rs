// Compile-once caching for the regular expressions used throughout the
// crate. The regex! macro is exported at the crate root.

mod cache;
