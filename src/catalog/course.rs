use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Assignment, CourseContent, Quiz, Video};
use crate::observer::CourseSubject;

/// The capability set every course variant implements.
///
/// All three variants — leaf courses, [`CompositeCourse`], and the
/// [`CertifiedCourse`] decorator — are used uniformly through `Rc<dyn Course>`;
/// the platform and command layers never name a concrete type.
///
/// The read accessors are pure and never fail. [`contains`](Course::contains)
/// exists so composites can refuse to become their own descendant, and
/// [`as_subject`](Course::as_subject) is the capability hook deciding whether
/// a course participates in change notification at all.
///
/// [`CompositeCourse`]: crate::catalog::CompositeCourse
/// [`CertifiedCourse`]: crate::catalog::CertifiedCourse
pub trait Course {
    fn id(&self) -> Uuid;
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    /// Whether this course is, or transitively contains, the course with the
    /// given id. Leaf courses are only themselves; composites search their
    /// children; decorators search the wrapped course.
    fn contains(&self, id: Uuid) -> bool {
        self.id() == id
    }

    /// The change-notification capability, for courses that have one.
    /// Only composite courses are subjects.
    fn as_subject(&self) -> Option<&dyn CourseSubject> {
        None
    }
}

/// An atomic programming course.
#[derive(Debug, Clone)]
pub struct ProgrammingCourse {
    id: Uuid,
    title: String,
    description: String,
    content: CourseContent,
    created_at: DateTime<Utc>,
}

impl ProgrammingCourse {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            content: CourseContent::default(),
            created_at: Utc::now(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn content(&self) -> &CourseContent {
        &self.content
    }

    pub fn add_video(&mut self, video: Video) {
        self.content.videos.push(video);
    }

    pub fn add_quiz(&mut self, quiz: Quiz) {
        self.content.quizzes.push(quiz);
    }

    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.content.assignments.push(assignment);
    }
}

impl Course for ProgrammingCourse {
    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// An atomic web development course.
#[derive(Debug, Clone)]
pub struct WebCourse {
    id: Uuid,
    title: String,
    description: String,
    content: CourseContent,
    created_at: DateTime<Utc>,
}

impl WebCourse {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            content: CourseContent::default(),
            created_at: Utc::now(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn content(&self) -> &CourseContent {
        &self.content
    }

    pub fn add_video(&mut self, video: Video) {
        self.content.videos.push(video);
    }

    pub fn add_quiz(&mut self, quiz: Quiz) {
        self.content.quizzes.push(quiz);
    }

    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.content.assignments.push(assignment);
    }
}

impl Course for WebCourse {
    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}
