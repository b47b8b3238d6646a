//! Data layer for the Classmere course catalog browser.
//!
//! Decodes course, section and building records from the catalog API's JSON
//! into immutable values for display code to read.

pub mod catalog;
pub mod config;

pub use catalog::{Building, CatalogError, Course, CourseList, Section};
