//! Property tests for the progression engine.

mod progression_tests;
