pub mod ai;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod export;
pub mod generate;
