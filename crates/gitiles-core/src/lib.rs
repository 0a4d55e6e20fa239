pub mod config;
pub mod logging;

pub mod browser;
pub mod link;
pub mod model;
pub mod probe;
pub mod validate;
