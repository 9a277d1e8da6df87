pub mod log;
pub mod opportunities;
pub mod overview;
pub mod risk;
pub mod routes;
pub mod strategies;
pub mod tokens;
