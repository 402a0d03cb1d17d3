pub mod ballot;
pub use ballot::*;

pub mod events;
pub use events::*;

pub mod registry;
pub use registry::*;

pub mod vote_record;
pub use vote_record::*;
