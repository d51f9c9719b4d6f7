//! Page assembly.
//!
//! Wraps the rendered tree fragment in a complete, self-contained HTML
//! document: inline CSS, a header, three statistics placeholders, the tree
//! container and a footer with the generation time and a repository link.
//!
//! The placeholders are filled in by the embedded script once the page is
//! displayed. It counts `.file` and `.directory` elements and parses every
//! `.file-size` label back into bytes, so the figures on the page depend
//! only on the rendered markup and not on the scan.
//!
//! Uses [maud](https://maud.lambda.xyz/) for the document skeleton; the tree
//! fragment, stylesheet and script are inserted pre-escaped.

use chrono::{DateTime, Local};
use maud::{html, PreEscaped, DOCTYPE};

const STYLE: &str = include_str!("../static/style.css");
const STATS_SCRIPT: &str = include_str!("../static/stats.js");

/// Format of the footer timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed page content surrounding the tree
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Title shown in the header and the document title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Label of the scanned directory, shown above the tree
    pub source_label: String,
    /// Footer link target
    pub repository_url: String,
    /// Generation time shown in the footer
    pub generated_at: String,
}

impl PageContext {
    /// Format a generation time for the footer
    pub fn timestamp(time: DateTime<Local>) -> String {
        time.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Embed a rendered tree fragment into the full page
pub fn assemble_page(ctx: &PageContext, tree_html: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (ctx.title) " - File Directory" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div.container {
                    header {
                        h1 { "📚 " (ctx.title) }
                        p { (ctx.subtitle) }
                    }
                    div.content {
                        div.stats {
                            (stat("total-files", "Total Files"))
                            (stat("total-dirs", "Directories"))
                            (stat("total-size", "Total Size"))
                        }
                        h2 { "📂 " (ctx.source_label) "/" }
                        div."directory-tree" {
                            (PreEscaped(format!("\n{}", tree_html)))
                        }
                    }
                    footer {
                        p { "Generated on " (ctx.generated_at) }
                        p style="margin-top: 10px;" {
                            a href=(ctx.repository_url) target="_blank" { "View on GitHub" }
                        }
                    }
                }
                script { (PreEscaped(STATS_SCRIPT)) }
            }
        }
    };
    markup.into_string()
}

/// A statistics placeholder, filled in by the page script
fn stat(id: &str, label: &str) -> maud::Markup {
    html! {
        div.stat {
            div."stat-value" id=(id) { "-" }
            div."stat-label" { (label) }
        }
    }
}
