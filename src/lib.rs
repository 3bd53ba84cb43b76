pub mod config;
pub mod derive;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod trip;
