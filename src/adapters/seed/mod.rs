pub mod builtin;
pub mod json_file;

pub use builtin::BuiltinSeed;
pub use json_file::{JsonFileSeed, SeedFileError};
