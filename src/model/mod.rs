mod entities;
mod error;
mod format;
mod request;

pub use entities::*;
pub use error::*;
pub use format::*;
pub use request::*;
