pub mod config;
pub mod rotate;
pub mod run;
pub mod scramble;
