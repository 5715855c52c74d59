mod fixtures;
mod property_debugger_tests;
mod similarity_tests;
mod stats_tests;
