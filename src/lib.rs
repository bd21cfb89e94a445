pub mod constants;
pub mod types;
pub mod accounts;
pub mod keygen;
pub mod git;
pub mod permissions;

pub use constants::*;
pub use types::*;
pub use accounts::*;
pub use keygen::*;
pub use git::*;
pub use permissions::*;
