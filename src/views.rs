use std::path::Path;

use handlebars::Handlebars;

pub const VIEWS_DIR: &str = "views";

/// Registers the page templates once at startup. A missing or invalid
/// template file is a packaging problem, so it aborts the process.
pub fn init_templates() -> Handlebars<'static> {
    let mut templates = Handlebars::new();

    for name in ["main", "recipe"] {
        let path = Path::new(VIEWS_DIR).join(format!("{name}.hbs"));
        templates
            .register_template_file(name, &path)
            .expect("Templates misconfigured!");
    }

    templates
}
