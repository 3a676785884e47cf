mod common;
mod config_tests;
mod health_tests;
