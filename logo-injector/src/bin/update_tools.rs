use anyhow::Result;
use logo_injector::update_tools_page;

// The one page this tool maintains, rewritten in place with no backup copy.
const MEMBERSHIP_PAGE: &str = "/srv/homepage/2025Updates/MLS-Membership-Information-2025.html";

fn main() -> Result<()> {
    env_logger::init();

    update_tools_page(MEMBERSHIP_PAGE)?;

    println!("Updated successfully");
    Ok(())
}
