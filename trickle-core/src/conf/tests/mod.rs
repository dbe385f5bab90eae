mod resolve_tests;
mod threshold_tests;
