//! Integration tests for the propbook contact book

mod command_surface;
mod config_integration;
mod deletion_flow;
mod test_utils;
