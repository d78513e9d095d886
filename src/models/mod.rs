pub mod export;
pub mod ranking;

pub use export::*;
pub use ranking::*;
