use std::fs;
use std::path::Path;

/// Load an HTML page fixture by name from the fixtures directory
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name));
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Missing page fixture: {}", path.display()))
}
