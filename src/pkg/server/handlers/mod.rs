pub mod auth;
pub mod candidates;
pub mod content;
pub mod probes;
