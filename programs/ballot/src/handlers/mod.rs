pub mod init_registry;
pub use init_registry::*;

pub mod create_ballot;
pub use create_ballot::*;

pub mod vote;
pub use vote::*;

pub mod end_ballot;
pub use end_ballot::*;

pub mod queries;
pub use queries::*;
