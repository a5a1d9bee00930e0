use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use crate::adapters::assets::template_assets;
use crate::domain::{AppError, TemplateId};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
///
/// Undefined values are strict: a template that prints a field missing from its
/// context fails instead of emitting an empty string.
pub struct MinijinjaTemplateRenderer {
    env: Environment<'static>,
}

impl MinijinjaTemplateRenderer {
    /// Renderer over the templates embedded in the binary.
    pub fn embedded() -> Result<Self, AppError> {
        let sources = TemplateId::ALL
            .into_iter()
            .map(|template| template_assets::template_source(template).map(|src| (template, src)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_sources(sources)
    }

    /// Renderer over caller-provided template sources.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (TemplateId, &'static str)>,
    ) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (template, source) in sources {
            env.add_template(template.as_str(), source)
                .map_err(|err| AppError::render(template, err))?;
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(&self, template: TemplateId, context: &Value) -> Result<String, AppError> {
        let tmpl =
            self.env.get_template(template.as_str()).map_err(|err| AppError::render(template, err))?;
        tmpl.render(context).map_err(|err| AppError::render(template, err))
    }
}
