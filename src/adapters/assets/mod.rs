pub mod template_assets;
