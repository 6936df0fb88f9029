pub mod config;
pub mod logging;

// Pipeline stages, in execution order.
pub mod count;
pub mod fetch;
pub mod rank;
pub mod tokenize;
