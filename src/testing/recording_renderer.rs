use std::sync::Mutex;

use serde_json::Value;

use crate::domain::{AppError, TemplateId};
use crate::ports::TemplateRenderer;

/// Renderer that records every call and echoes the template name and context.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<(TemplateId, Value)>>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates rendered so far, in call order.
    pub fn templates(&self) -> Vec<TemplateId> {
        self.calls.lock().unwrap().iter().map(|(template, _)| *template).collect()
    }

    pub fn contexts_for(&self, template: TemplateId) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == template)
            .map(|(_, ctx)| ctx.clone())
            .collect()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render(&self, template: TemplateId, context: &Value) -> Result<String, AppError> {
        self.calls.lock().unwrap().push((template, context.clone()));
        Ok(format!("# {}\n{}\n", template, context))
    }
}
