pub mod document;
pub mod interaction;
