// Constants used throughout the codebase

pub mod common;
pub mod urls;

pub use common::*;
pub use urls::*;
