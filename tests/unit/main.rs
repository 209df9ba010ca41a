//! Unit-level tests against the public API.

mod catalog_loader_tests;
mod cli_command_parse_tests;
mod config_tests;
mod document_tests;
