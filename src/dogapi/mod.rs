pub mod breeds;
pub mod error;
pub mod types;

pub use breeds::*;
pub use error::*;
pub use types::*;
