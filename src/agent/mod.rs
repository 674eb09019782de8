pub mod input_types;
pub mod stateless_llm_factory;
pub mod dockerfile_generator;

pub mod stateless_llm;

pub use input_types::*;
pub use stateless_llm_factory::*;
pub use dockerfile_generator::*;
pub use stateless_llm::*;
