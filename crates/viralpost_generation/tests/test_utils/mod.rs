//! Test utilities for post generation tests.
//!
//! This module provides a scriptable model driver.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{Event, ImageBehavior, MockDriver, TextBehavior};
