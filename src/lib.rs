//! Course catalog core for an online learning platform.
//!
//! Courses are used polymorphically through the [`catalog::Course`] trait:
//! atomic leaves built by [`catalog::CourseFactory`] implementations,
//! [`catalog::CompositeCourse`] bundles of sub-courses, and the transparent
//! [`catalog::CertifiedCourse`] decorator, all freely nestable.
//!
//! Composite courses broadcast structural changes to enrolled users through
//! the [`observer`] capabilities; the [`platform::Platform`] registry derives
//! the observer wiring from its enrollments when a course is added or
//! removed; and [`command`] packages those registry mutations as reversible,
//! substitutable units.
//!
//! Everything is in-memory, synchronous, and single-threaded: shared state is
//! `Rc`/`RefCell`, and embedders wanting concurrency serialize access
//! themselves.

pub mod catalog;
pub mod command;
pub mod error;
pub mod models;
pub mod observer;
pub mod platform;

pub use error::CatalogError;
