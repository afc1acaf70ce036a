//! Small pure helpers shared by services and adapters.

pub mod file_size;
pub mod validation;

pub use file_size::format_file_size;
pub use validation::sanitize_file_name;
