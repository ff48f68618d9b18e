//! Collaborator records for the course catalog.
//!
//! # Core Concepts
//!
//! - [`User`]: a student or instructor. Every user doubles as a
//!   [`CourseObserver`](crate::observer::CourseObserver), so any user can be
//!   subscribed to a composite course's change events.
//! - [`Enrollment`]: the immutable `(course, user)` pair the platform scans to
//!   decide which observers to wire onto a newly registered course.
//! - [`Video`], [`Quiz`], [`Question`], [`Assignment`]: flat records bundled
//!   into a [`CourseContent`] payload carried by leaf courses. The catalog
//!   machinery treats them as opaque cargo.

mod content;
mod enrollment;
mod user;

pub use content::*;
pub use enrollment::*;
pub use user::*;
