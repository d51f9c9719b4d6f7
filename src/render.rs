/*!
 * Rendering of the sorted tree into nested collapsible markup
 */

use std::borrow::Cow;
use std::fmt::Write;

use quick_xml::escape::escape;

use crate::types::{DirectoryNode, FileNode, TreeNode};
use crate::utils::format_file_size;

/// Spaces added per nesting level
const INDENT_STEP: usize = 2;

const DIRECTORY_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

/// Whether entry names are escaped before they are inserted into markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Neutralise `& < > " '` (default)
    #[default]
    Escape,
    /// Insert names verbatim
    Raw,
}

impl EscapePolicy {
    fn apply<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            EscapePolicy::Escape => escape(name),
            EscapePolicy::Raw => Cow::Borrowed(name),
        }
    }
}

/// Renders tree nodes as nested `<details>` blocks and file lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    escape: EscapePolicy,
}

impl TreeRenderer {
    pub fn new(escape: EscapePolicy) -> Self {
        Self { escape }
    }

    /// Render a node sequence starting at nesting level 0
    pub fn render(&self, nodes: &[TreeNode]) -> String {
        let mut out = String::new();
        self.render_level(nodes, 0, &mut out);
        out
    }

    fn render_level(&self, nodes: &[TreeNode], level: usize, out: &mut String) {
        for node in nodes {
            match node {
                TreeNode::Directory(dir) => self.render_directory(dir, level, out),
                TreeNode::File(file) => self.render_file(file, level, out),
            }
        }
    }

    fn render_directory(&self, dir: &DirectoryNode, level: usize, out: &mut String) {
        let indent = " ".repeat(level * INDENT_STEP);
        let name = self.escape.apply(&dir.name);

        // Writing to a String cannot fail
        let _ = writeln!(out, "{indent}<details class=\"directory\" open>");
        let _ = writeln!(
            out,
            "{indent}  <summary>{DIRECTORY_ICON} <strong>{name}</strong></summary>"
        );
        let _ = writeln!(out, "{indent}  <div class=\"directory-content\">");
        self.render_level(&dir.children, level + 2, out);
        let _ = writeln!(out, "{indent}  </div>");
        let _ = writeln!(out, "{indent}</details>");
    }

    fn render_file(&self, file: &FileNode, level: usize, out: &mut String) {
        let indent = " ".repeat(level * INDENT_STEP);
        let _ = writeln!(
            out,
            "{indent}<div class=\"file\">{FILE_ICON} {} <span class=\"file-size\">({})</span></div>",
            self.escape.apply(&file.name),
            format_file_size(file.size)
        );
    }
}
