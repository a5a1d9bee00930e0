pub mod assets;
pub mod filesystem;
#[cfg(test)]
pub mod memory_filesystem;
pub mod template;

pub use filesystem::LocalFilesystem;
#[cfg(test)]
pub use memory_filesystem::MemoryFilesystem;
pub use template::MinijinjaTemplateRenderer;
