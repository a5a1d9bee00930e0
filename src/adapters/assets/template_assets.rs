use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateId};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Source of the embedded template for `template`.
pub fn template_source(template: TemplateId) -> Result<&'static str, AppError> {
    let file = TEMPLATES_DIR
        .get_file(template.asset_file_name())
        .ok_or_else(|| AppError::render(template, "embedded template asset is missing"))?;
    file.contents_utf8()
        .ok_or_else(|| AppError::render(template, "embedded template asset is not UTF-8"))
}
