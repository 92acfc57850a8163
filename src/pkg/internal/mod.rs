pub mod adaptors;
pub mod auth;
pub mod blob;
pub mod sanitize;
pub mod sheets;
