pub mod honeypot;
pub mod metadata;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod validate;
