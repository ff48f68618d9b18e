use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video lesson within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub duration_minutes: u32,
}

impl Video {
    pub fn new(title: impl Into<String>, url: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
            duration_minutes,
        }
    }
}

/// A quiz associated with a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            questions: Vec::new(),
        }
    }
}

/// A multiple-choice question within a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer.
    pub correct_choice: usize,
}

impl Question {
    pub fn new(text: impl Into<String>, choices: Vec<String>, correct_choice: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            choices,
            correct_choice,
        }
    }
}

/// An assignment associated with a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub submission_url: String,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        submission_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            submission_url: submission_url.into(),
            created_at: Utc::now(),
        }
    }
}

/// The teaching material a leaf course carries.
///
/// Opaque to the catalog machinery: the composite/decorator/platform layers
/// never look inside, they only move courses around.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseContent {
    pub videos: Vec<Video>,
    pub quizzes: Vec<Quiz>,
    pub assignments: Vec<Assignment>,
}
