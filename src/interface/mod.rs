mod clock;
mod fetcher;

pub use clock::*;
pub use fetcher::*;
