mod clock_system;
mod fetcher_rest;
mod list_controller;

pub use clock_system::*;
pub use fetcher_rest::*;
pub use list_controller::*;
