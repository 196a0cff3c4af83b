pub mod logos;
pub mod rewrite;

#[cfg(test)]
pub mod tests;

// Flat re-exports so the bin and tests don't need the module paths
pub use crate::logos::{logo_domain, LOGO_BASE_URL, LOGO_DOMAINS};
pub use crate::rewrite::{close_tool_content, inject_logos, update_tools_page};
