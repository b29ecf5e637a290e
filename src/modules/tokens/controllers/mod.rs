pub mod token_controller;

pub use token_controller::configure;
