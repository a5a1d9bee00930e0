use serde_json::Value;

use crate::domain::{AppError, TemplateId};

/// Port for rendering one of the fixed templates against a data context.
pub trait TemplateRenderer {
    /// Render `template` with `context`.
    ///
    /// Failures surface as `AppError::Render` tagged with the template identifier.
    fn render(&self, template: TemplateId, context: &Value) -> Result<String, AppError>;
}
