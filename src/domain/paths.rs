//! Output path catalog under the nginx configuration root.

use std::path::{Path, PathBuf};

pub const CONF_DIR: &str = "conf.d";
pub const SNIPPETS_DIR: &str = "snippets";
pub const SSL_PARAMS_FILE: &str = "ssl-params.conf";

/// `<root>/conf.d`
pub fn conf_dir(root: &Path) -> PathBuf {
    root.join(CONF_DIR)
}

/// `<root>/snippets`
pub fn snippets_dir(root: &Path) -> PathBuf {
    root.join(SNIPPETS_DIR)
}

/// `<root>/snippets/ssl-params.conf`
pub fn ssl_params(root: &Path) -> PathBuf {
    snippets_dir(root).join(SSL_PARAMS_FILE)
}

/// `<root>/snippets/ssl-<key>.conf`
pub fn ssl_domain(root: &Path, key: &str) -> PathBuf {
    snippets_dir(root).join(format!("ssl-{}.conf", key))
}

/// `<root>/conf.d/<file_name>`
pub fn site_block(root: &Path, file_name: &str) -> PathBuf {
    conf_dir(root).join(file_name)
}
