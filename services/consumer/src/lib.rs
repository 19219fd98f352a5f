pub mod config;
pub mod report;

pub use config::ConsumerConfig;
pub use report::render;
