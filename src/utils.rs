/*!
 * Utility functions for dirpage
 */

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Format a human-readable file size.
///
/// Sizes below one kilobyte are printed as whole bytes; everything else is
/// printed with two decimals in KB or MB. There is no GB unit, so very large
/// sizes keep growing in MB.
pub fn format_file_size(size: u64) -> String {
    if size < KB {
        format!("{} B", size)
    } else if size < MB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{:.2} MB", size as f64 / MB as f64)
    }
}

/// Join a child name onto a parent's relative path with a `/` separator.
///
/// Children of the scan root have an empty parent and keep their bare name.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
