use std::rc::Rc;

use crate::catalog::{Course, ProgrammingCourse, WebCourse};

/// Builds leaf courses behind the [`Course`] trait.
///
/// The factory indirection is what keeps the platform and command layers
/// ignorant of concrete leaf types: callers hold a `&dyn CourseFactory` and
/// get back an `Rc<dyn Course>`, whichever variant the factory produces.
pub trait CourseFactory {
    fn create_course(&self, title: &str, description: &str) -> Rc<dyn Course>;
}

/// Produces [`ProgrammingCourse`] leaves.
#[derive(Debug, Default)]
pub struct ProgrammingCourseFactory;

impl CourseFactory for ProgrammingCourseFactory {
    fn create_course(&self, title: &str, description: &str) -> Rc<dyn Course> {
        Rc::new(ProgrammingCourse::new(title, description))
    }
}

/// Produces [`WebCourse`] leaves.
#[derive(Debug, Default)]
pub struct WebCourseFactory;

impl CourseFactory for WebCourseFactory {
    fn create_course(&self, title: &str, description: &str) -> Rc<dyn Course> {
        Rc::new(WebCourse::new(title, description))
    }
}
