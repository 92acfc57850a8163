pub mod candidates;
pub mod content;
