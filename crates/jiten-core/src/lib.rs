pub mod chunk;
pub mod error;
pub mod load;
pub mod merge;
pub mod scan;
pub mod snapshot;
