//! The course abstraction and its three variants.
//!
//! - [`Course`]: the polymorphic capability set (`id`/`title`/`description`).
//! - [`ProgrammingCourse`] / [`WebCourse`]: atomic leaves, built through the
//!   [`CourseFactory`] indirection so callers never name concrete types.
//! - [`CertifiedCourse`]: a transparent decorator layering a certification
//!   label over any course, stackable.
//! - [`CompositeCourse`]: an ordered bundle of sub-courses that doubles as
//!   the change-notification subject.

mod composite;
mod course;
mod decorator;
mod factory;

pub use composite::*;
pub use course::*;
pub use decorator::*;
pub use factory::*;
