use std::rc::Rc;

use uuid::Uuid;

use crate::catalog::Course;
use crate::command::PlatformCommand;
use crate::models::{Enrollment, User};
use crate::observer::CourseObserver;

/// The mutable registry of courses, users, and enrollments.
///
/// The three collections are independent ordered sequences; duplicates are
/// permitted and removals of absent elements are no-ops. The platform lives
/// for the process only — there is no persistence.
///
/// # Observer wiring
///
/// Wiring happens exclusively at [`add_course`](Platform::add_course) /
/// [`remove_course`](Platform::remove_course) time: when a subject-capable
/// course is added, every observer discoverable through the enrollment
/// registry *at that moment* is registered on it. Enrollments added later do
/// not retroactively subscribe — that is a contract of the protocol, not a
/// shortcut. Callers who want the fresh enrollment wired re-add the course.
#[derive(Default)]
pub struct Platform {
    courses: Vec<Rc<dyn Course>>,
    users: Vec<Rc<User>>,
    enrollments: Vec<Enrollment>,
}

impl Platform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course. If the course is a subject, all currently
    /// discoverable observers are registered on it before it joins the
    /// registry, so a new composite starts already wired.
    pub fn add_course(&mut self, course: Rc<dyn Course>) {
        if let Some(subject) = course.as_subject() {
            for observer in self.discover_observers() {
                subject.register_observer(observer);
            }
        }
        tracing::info!(course = %course.title(), "course added to platform");
        self.courses.push(course);
    }

    /// Remove the first registry entry with the given id; no-op when absent.
    /// A removed subject has the currently discoverable observers
    /// unregistered from it, mirroring `add_course`.
    pub fn remove_course(&mut self, course_id: Uuid) {
        let Some(index) = self.courses.iter().position(|c| c.id() == course_id) else {
            tracing::debug!(%course_id, "course not on platform, nothing removed");
            return;
        };

        let course = self.courses.remove(index);
        if let Some(subject) = course.as_subject() {
            for observer in self.discover_observers() {
                subject.remove_observer(observer.observer_id());
            }
        }
        tracing::info!(course = %course.title(), "course removed from platform");
    }

    pub fn add_user(&mut self, user: Rc<User>) {
        self.users.push(user);
    }

    /// No cascading effect on enrollments or observer wiring.
    pub fn remove_user(&mut self, user_id: Uuid) {
        if let Some(index) = self.users.iter().position(|u| u.id == user_id) {
            self.users.remove(index);
        }
    }

    /// Membership only: adding an enrollment does not re-wire observers for
    /// courses already on the platform.
    pub fn add_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    pub fn remove_enrollment(&mut self, enrollment_id: Uuid) {
        if let Some(index) = self.enrollments.iter().position(|e| e.id() == enrollment_id) {
            self.enrollments.remove(index);
        }
    }

    /// The full ordered course registry.
    pub fn courses(&self) -> &[Rc<dyn Course>] {
        &self.courses
    }

    pub fn users(&self) -> &[Rc<User>] {
        &self.users
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Run a command against this platform.
    pub fn execute_command(&mut self, command: &dyn PlatformCommand) {
        command.execute(self);
    }

    /// Every observer reachable through the enrollment registry right now:
    /// one entry per enrollment, namely the enrolled user's observer
    /// capability. (The original implementation inspected the enrollment's
    /// course for that capability; users are the observers, so we collect
    /// from the user side.)
    fn discover_observers(&self) -> Vec<Rc<dyn CourseObserver>> {
        self.enrollments
            .iter()
            .map(|enrollment| -> Rc<dyn CourseObserver> { enrollment.user().clone() })
            .collect()
    }
}
