//! Run options and their defaults.

use std::path::PathBuf;

/// Config file name looked up in the user's home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".nginxconf";
/// Conventional nginx configuration root.
pub const DEFAULT_OUTPUT_ROOT: &str = "/etc/nginx";
/// Site block file name written under `conf.d/`.
pub const DEFAULT_GENERATED_FILE_NAME: &str = "ngxconf.conf";

/// Caller-supplied options. Any unset field falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub config_path: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
    pub generated_file_name: Option<String>,
}

/// Fully resolved options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config_path: PathBuf,
    pub output_root: PathBuf,
    pub generated_file_name: String,
}

impl GenerateOptions {
    /// Merge with defaults, reading `$HOME` for the default config path.
    pub fn resolve(self) -> Options {
        let home = std::env::var_os("HOME").map(PathBuf::from);
        self.resolve_with_home(home)
    }

    pub(crate) fn resolve_with_home(self, home: Option<PathBuf>) -> Options {
        let config_path = self.config_path.unwrap_or_else(|| match home {
            Some(home) => home.join(DEFAULT_CONFIG_FILE),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        });

        Options {
            config_path,
            output_root: self.output_root.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT)),
            generated_file_name: self
                .generated_file_name
                .unwrap_or_else(|| DEFAULT_GENERATED_FILE_NAME.to_string()),
        }
    }
}
