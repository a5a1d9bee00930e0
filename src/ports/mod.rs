mod output_filesystem;
mod template_renderer;

pub use output_filesystem::OutputFilesystem;
pub use template_renderer::TemplateRenderer;
