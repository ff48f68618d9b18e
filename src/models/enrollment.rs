use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Course;
use crate::models::User;

/// The immutable fact that a user is associated with a course.
///
/// Read-only after creation. Enrollments are what the platform scans to
/// discover which observers belong on a subject-capable course — see
/// `Platform::add_course`.
#[derive(Clone)]
pub struct Enrollment {
    id: Uuid,
    course: Rc<dyn Course>,
    user: Rc<User>,
    enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(course: Rc<dyn Course>, user: Rc<User>) -> Self {
        Self {
            id: Uuid::new_v4(),
            course,
            user,
            enrolled_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn course(&self) -> &Rc<dyn Course> {
        &self.course
    }

    pub fn user(&self) -> &Rc<User> {
        &self.user
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }
}

impl fmt::Debug for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enrollment")
            .field("id", &self.id)
            .field("course", &self.course.title())
            .field("user", &self.user.username)
            .field("enrolled_at", &self.enrolled_at)
            .finish()
    }
}
