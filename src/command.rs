use std::rc::Rc;

use uuid::Uuid;

use crate::catalog::Course;
use crate::platform::Platform;

/// A platform mutation packaged as a first-class, substitutable unit.
///
/// `execute` performs exactly one mutation and returns nothing. Commands are
/// stateless beyond construction and may run more than once: re-executing an
/// [`AddCourseCommand`] appends a duplicate, re-executing a
/// [`RemoveCourseCommand`] is a safe no-op. There is no built-in undo or
/// history — the inverse command is the undo, and any history list belongs to
/// the caller.
///
/// Commands capture the course, not the platform: the target platform is
/// supplied at execution time, which keeps the platform free to be used
/// between constructing a command and running it.
pub trait PlatformCommand {
    fn execute(&self, platform: &mut Platform);
}

/// Adds a course to the platform's registry (wiring observers if the course
/// is a subject, per [`Platform::add_course`]).
pub struct AddCourseCommand {
    course: Rc<dyn Course>,
}

impl AddCourseCommand {
    pub fn new(course: Rc<dyn Course>) -> Self {
        Self { course }
    }
}

impl PlatformCommand for AddCourseCommand {
    fn execute(&self, platform: &mut Platform) {
        tracing::debug!(course = %self.course.title(), "executing add-course command");
        platform.add_course(self.course.clone());
    }
}

/// Removes a course from the platform's registry; a no-op when the course was
/// never added.
pub struct RemoveCourseCommand {
    course_id: Uuid,
}

impl RemoveCourseCommand {
    pub fn new(course_id: Uuid) -> Self {
        Self { course_id }
    }
}

impl PlatformCommand for RemoveCourseCommand {
    fn execute(&self, platform: &mut Platform) {
        tracing::debug!(course_id = %self.course_id, "executing remove-course command");
        platform.remove_course(self.course_id);
    }
}
