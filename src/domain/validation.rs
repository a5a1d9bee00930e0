/// Checks that a name can be used as part of a single generated file name.
///
/// Rejects only what would change the output path: an empty name, `.` or `..`,
/// path separators (`/`, `\`) and NUL bytes. Everything else, including spaces,
/// punctuation and non-ASCII text, is kept verbatim.
pub fn validate_file_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| matches!(c, '/' | '\\' | '\0'))
}
