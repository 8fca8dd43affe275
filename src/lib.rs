pub mod args;
pub mod error;
pub mod io;
pub mod model;
pub mod utils;
