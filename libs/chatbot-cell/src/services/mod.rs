pub mod history;
pub mod navigator;
pub mod responder;
pub mod responses;
