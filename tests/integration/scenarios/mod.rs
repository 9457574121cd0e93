//! Scenario tests

mod persistence_tests;
mod planning_tests;
mod property_tests;
