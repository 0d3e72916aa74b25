pub mod sky;
pub mod star;

pub use sky::*;
pub use star::*;
