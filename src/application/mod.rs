pub mod add_document;
pub mod agent;
pub mod search;
pub mod summarize;
pub mod tools;
