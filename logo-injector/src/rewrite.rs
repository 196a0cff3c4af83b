use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::logos::{logo_domain, LOGO_BASE_URL};

/// Add a logo image and a `tool-content` wrapper to every tool card whose
/// heading names a tool with a known logo domain.
///
/// Cards that already carry a logo never match: the pattern requires the
/// heading to follow the opening tag directly. Cards with an unknown heading
/// are returned verbatim.
pub fn inject_logos(document: &str) -> String {
    // Pattern to find tool divs that don't already have logos
    let card_re =
        Regex::new(r#"(<div class="tool reveal reveal-up">)\s*\n(\s*)(<h4>)(.*?)(</h4>)"#)
            .unwrap();

    card_re
        .replace_all(document, |caps: &Captures| {
            let opening_div = &caps[1];
            let indent = &caps[2];
            let h4_open = &caps[3];
            let tool_name = &caps[4];
            let h4_close = &caps[5];

            match logo_domain(tool_name) {
                Some(domain) => {
                    log::debug!("adding {} logo for {}", domain, tool_name);
                    format!(
                        "{}\n{}<div class=\"tool-logo\"><img src=\"{}{}\" alt=\"{}\" loading=\"lazy\"></div>\n{}<div class=\"tool-content\">\n{}{}{}{}",
                        opening_div,
                        indent,
                        LOGO_BASE_URL,
                        domain,
                        tool_name,
                        indent,
                        indent,
                        h4_open,
                        tool_name,
                        h4_close
                    )
                }
                None => {
                    log::debug!("no logo domain for {}, leaving card unchanged", tool_name);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Close the `tool-content` wrappers opened by [`inject_logos`].
///
/// The wrapper's closing point is many lines past the heading, so it can't be
/// captured by the card pattern; instead every card ends with the same
/// `</a></p>` link line, which locates the card's closing tag. One extra
/// closing tag is inserted before it, unconditionally for every match.
pub fn close_tool_content(document: &str) -> String {
    let closing_re = Regex::new(r"(</a></p>)\n(\s+)(</div>)").unwrap();

    closing_re
        .replace_all(document, |caps: &Captures| {
            format!("{}\n{}</div>\n{}{}", &caps[1], &caps[2], &caps[2], &caps[3])
        })
        .into_owned()
}

/// Rewrite the membership page in place: read it, run both passes, write it
/// back to the same path. No backup copy is kept.
///
/// Known limitation: running this twice against the same page is not safe.
/// The closure pass re-matches the already-closed cards and inserts a second
/// closing tag each time.
pub fn update_tools_page<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;

    let content = inject_logos(&content);
    let content = close_tool_content(&content);

    fs::write(path, content)
        .with_context(|| format!("Failed to write page: {}", path.display()))
}
