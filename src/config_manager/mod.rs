pub mod main;
pub mod stateless_llm;
pub mod utils;

pub use main::*;
pub use stateless_llm::*;
