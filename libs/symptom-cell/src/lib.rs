pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use services::parser::{encode, parse_symptoms};
pub use services::vocabulary::{SymptomVocabulary, DISEASES};
