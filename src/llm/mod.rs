pub mod interface;
pub mod openai_compatible_llm;
pub mod factory;

pub use interface::*;
pub use openai_compatible_llm::*;
pub use factory::*;
