mod recording_renderer;

pub use recording_renderer::RecordingRenderer;
