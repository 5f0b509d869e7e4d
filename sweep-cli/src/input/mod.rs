//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod sequence;

pub use file_reader::{FileReader, JobFileKind};
pub use glob_resolver::resolve_patterns;
pub use sequence::parse_sequence;
