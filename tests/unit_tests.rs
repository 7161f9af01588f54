// Unit tests exercising the public API from outside the crate
// This file acts as the entry point for all unit tests in tests/unit/

mod unit {
    mod config_tests;
    mod options_tests;
    mod url_builder_tests;
}
