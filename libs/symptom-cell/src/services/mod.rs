pub mod catalog;
pub mod classifier;
pub mod parser;
pub mod prediction;
pub mod vocabulary;
