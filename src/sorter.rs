/*!
 * Ordering of directory contents
 */

use std::cmp::Ordering;

use clap::ValueEnum;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::TreeNode;

/// How entry names are compared within the directory and file groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortPolicy {
    /// Alphabetical ignoring case and accents (default)
    #[default]
    CaseInsensitive,
    /// Plain code point order, uppercase before lowercase
    CaseSensitive,
}

impl SortPolicy {
    /// Compare two entry names under this policy.
    ///
    /// Case-insensitive order folds case and accents first, then puts
    /// unaccented before accented and lowercase before uppercase, with the
    /// raw name as the final tie-break.
    pub fn compare_names(self, a: &str, b: &str) -> Ordering {
        match self {
            SortPolicy::CaseInsensitive => fold(a)
                .cmp(&fold(b))
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| case_key(a).cmp(case_key(b)))
                .then_with(|| a.cmp(b)),
            SortPolicy::CaseSensitive => a.cmp(b),
        }
    }

    /// Compare two nodes: directories first, then by name
    pub fn compare(self, a: &TreeNode, b: &TreeNode) -> Ordering {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| self.compare_names(a.name(), b.name()))
    }
}

/// Lowercased name with diacritics stripped
fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Per-character case flags, lowercase first
fn case_key(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.chars().map(char::is_uppercase)
}

/// Sort one directory's children in place
pub fn sort_children(children: &mut [TreeNode], policy: SortPolicy) {
    children.sort_by(|a, b| policy.compare(a, b));
}

/// Sort every level of the tree in place
pub fn sort_tree(nodes: &mut [TreeNode], policy: SortPolicy) {
    sort_children(nodes, policy);
    for node in nodes.iter_mut() {
        if let TreeNode::Directory(dir) = node {
            sort_tree(&mut dir.children, policy);
        }
    }
}
