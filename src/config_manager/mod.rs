pub mod llm;
pub mod main;
pub mod system;
pub mod utils;

pub use llm::LLMConfig;
pub use main::Config;
pub use system::SystemConfig;
