use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Course;
use crate::error::CatalogError;
use crate::observer::{CourseObserver, CourseSubject};

/// A course composed of an ordered sequence of sub-courses.
///
/// Children can be any course variant, including nested composites and
/// decorators. Insertion order is preserved for display; duplicates are
/// allowed. The composite's own title and description are what readers see —
/// children contribute structure, not text.
///
/// A composite is also the only [`CourseSubject`]: users registered as
/// observers are notified when the caller broadcasts a structural change via
/// [`notify_observers`](CourseSubject::notify_observers). Broadcasting is
/// explicit — `add_sub_course`/`remove_sub_course` do not notify on their own.
///
/// Children and observers live in `RefCell`s so a composite shared as
/// `Rc<dyn Course>` can be mutated through `&self`. The whole catalog is
/// single-threaded state; embedders serialize access themselves.
pub struct CompositeCourse {
    id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    children: RefCell<Vec<Rc<dyn Course>>>,
    observers: RefCell<Vec<Rc<dyn CourseObserver>>>,
}

impl CompositeCourse {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
            children: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a sub-course.
    ///
    /// Any variant is accepted, duplicates included. The one rejected input is
    /// a course that is, or transitively contains, this composite: nesting it
    /// would make the composite its own descendant, so the call fails with
    /// [`CatalogError::SubCourseCycle`] and the child sequence is unchanged.
    pub fn add_sub_course(&self, course: Rc<dyn Course>) -> Result<(), CatalogError> {
        if course.contains(self.id) {
            return Err(CatalogError::SubCourseCycle {
                parent: self.title.clone(),
                child: course.title().to_string(),
            });
        }

        tracing::debug!(parent = %self.title, child = %course.title(), "sub-course added");
        self.children.borrow_mut().push(course);
        Ok(())
    }

    /// Remove the first sub-course with the given id. Silently a no-op when
    /// no child matches.
    pub fn remove_sub_course(&self, course_id: Uuid) {
        let mut children = self.children.borrow_mut();
        match children.iter().position(|c| c.id() == course_id) {
            Some(index) => {
                let removed = children.remove(index);
                tracing::debug!(parent = %self.title, child = %removed.title(), "sub-course removed");
            }
            None => {
                tracing::debug!(parent = %self.title, %course_id, "sub-course not present, nothing removed");
            }
        }
    }

    /// Snapshot of the current child sequence, in insertion order.
    pub fn sub_courses(&self) -> Vec<Rc<dyn Course>> {
        self.children.borrow().clone()
    }

    pub fn sub_course_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl Course for CompositeCourse {
    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn contains(&self, id: Uuid) -> bool {
        self.id == id || self.children.borrow().iter().any(|c| c.contains(id))
    }

    fn as_subject(&self) -> Option<&dyn CourseSubject> {
        Some(self)
    }
}

impl CourseSubject for CompositeCourse {
    fn register_observer(&self, observer: Rc<dyn CourseObserver>) {
        // No deduplication: a twice-registered observer is notified twice.
        self.observers.borrow_mut().push(observer);
    }

    fn remove_observer(&self, observer_id: Uuid) {
        let mut observers = self.observers.borrow_mut();
        if let Some(index) = observers.iter().position(|o| o.observer_id() == observer_id) {
            observers.remove(index);
        }
    }

    fn notify_observers(&self) {
        // Snapshot before delivering, so an observer that (un)subscribes
        // mid-broadcast does not alias the borrow.
        let observers: Vec<Rc<dyn CourseObserver>> = self.observers.borrow().clone();
        tracing::debug!(course = %self.title, observers = observers.len(), "notifying observers");
        for observer in observers {
            observer.course_updated(self);
        }
    }
}
