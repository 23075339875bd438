pub mod error;
pub mod loader;
pub mod project;
pub mod schema;

pub use error::InsertError;
pub use loader::BatchLoader;
pub use project::{project, ProjectedRows};
