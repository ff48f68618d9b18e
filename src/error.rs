use thiserror::Error;

/// Catalog errors.
///
/// Almost every core operation is total: reads never fail and removals of
/// absent elements are no-ops. The one exception is composite nesting, which
/// refuses to create a course that contains itself.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("adding '{child}' under '{parent}' would make the course its own descendant")]
    SubCourseCycle { parent: String, child: String },
}
