pub mod analyzers;
pub mod cache;
pub mod fetch;
pub mod loader;
pub mod output;
pub mod records;
