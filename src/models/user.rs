use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Course;
use crate::observer::CourseObserver;

/// A user (student or instructor) of the platform.
///
/// Every user is a potential subscriber to course change events: `User`
/// implements [`CourseObserver`] regardless of the `is_instructor` flag.
/// Notifications received through that capability accumulate in an in-memory
/// feed, inspectable via [`notifications`](User::notifications).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_instructor: bool,
    pub created_at: DateTime<Utc>,
    /// Runtime state, not part of the user record.
    #[serde(skip)]
    notifications: RefCell<Vec<String>>,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>, is_instructor: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            is_instructor,
            created_at: Utc::now(),
            notifications: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the notification feed, oldest first. Each entry is the
    /// title of a course that broadcast an update to this user.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }
}

impl CourseObserver for User {
    fn observer_id(&self) -> Uuid {
        self.id
    }

    fn course_updated(&self, course: &dyn Course) {
        tracing::info!(user = %self.username, course = %course.title(), "course update received");
        self.notifications.borrow_mut().push(course.title().to_string());
    }
}
