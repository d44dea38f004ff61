//! Loading and validation of scratch game configuration files.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
