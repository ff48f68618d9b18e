//! Publish/subscribe capabilities for course change events.
//!
//! The two capabilities are deliberately decoupled from the course and user
//! types themselves: a course participates in notification only if it exposes
//! [`CourseSubject`] (see [`Course::as_subject`]), and anything implementing
//! [`CourseObserver`] can subscribe, regardless of where it sits in the data
//! model. Today the only subject is `CompositeCourse` and the only observer is
//! `User`; future variants opt in independently.
//!
//! [`Course::as_subject`]: crate::catalog::Course::as_subject

use std::rc::Rc;

use uuid::Uuid;

use crate::catalog::Course;

/// A source of course change events.
///
/// Observers are invoked synchronously and in registration order by
/// [`notify_observers`](CourseSubject::notify_observers). Registration is not
/// deduplicated: registering the same observer twice means it is notified
/// twice per broadcast.
///
/// Notification is **not** automatic on structural changes — callers broadcast
/// explicitly after the changes they want observers to see.
pub trait CourseSubject {
    /// Append an observer to the subscription list.
    fn register_observer(&self, observer: Rc<dyn CourseObserver>);

    /// Remove the first registered observer with the given id. No-op when no
    /// observer matches.
    fn remove_observer(&self, observer_id: Uuid);

    /// Synchronously deliver `course_updated` to every registered observer,
    /// in registration order.
    fn notify_observers(&self);
}

/// A party interested in course change events.
pub trait CourseObserver {
    /// Identity used for targeted removal from a subject's subscription list.
    fn observer_id(&self) -> Uuid;

    /// Called by a subject when its structure changed. `course` is the
    /// subject that changed. Infallible by contract.
    fn course_updated(&self, course: &dyn Course);
}
