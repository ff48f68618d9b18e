use std::rc::Rc;

use uuid::Uuid;

use crate::catalog::Course;

/// A decorator marking a course as carrying a certification.
///
/// Wraps exactly one existing course and delegates `title`/`description`
/// verbatim, so wrapping is transparent to every reader. The wrapped course is
/// never copied or mutated; the decorator only layers the certification label
/// on top. Since a `CertifiedCourse` is itself a [`Course`], decorators stack:
/// a certification can wrap another certification, a composite, or a leaf.
pub struct CertifiedCourse {
    id: Uuid,
    inner: Rc<dyn Course>,
    certification: String,
}

impl CertifiedCourse {
    pub fn new(inner: Rc<dyn Course>, certification: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            inner,
            certification: certification.into(),
        }
    }

    /// The certification label this decorator layers onto the course.
    pub fn certification(&self) -> &str {
        &self.certification
    }

    /// The wrapped course.
    pub fn inner(&self) -> &Rc<dyn Course> {
        &self.inner
    }

    /// Announce the certification. Purely additive: logs the label without
    /// touching the wrapped course.
    pub fn announce(&self) {
        tracing::info!(
            course = %self.inner.title(),
            certification = %self.certification,
            "course certified"
        );
    }
}

impl Course for CertifiedCourse {
    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        self.inner.title()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn contains(&self, id: Uuid) -> bool {
        self.id == id || self.inner.contains(id)
    }
}
