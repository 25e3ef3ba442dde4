//! Domain models for BAR Core

pub mod business;
pub mod common;
pub mod invitation;
pub mod lookup;

pub use business::*;
pub use common::*;
pub use invitation::*;
pub use lookup::*;
