//! HTML views rendered with minijinja / HTML 视图
//!
//! Templates live in `resources/templates` and are compiled into the binary.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../resources/templates/layout.html")),
    ("movies.html", include_str!("../../resources/templates/movies.html")),
    ("movie_details.html", include_str!("../../resources/templates/movie_details.html")),
    ("error.html", include_str!("../../resources/templates/error.html")),
];

/// Global template environment / 全局模板环境
static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!("Failed to compile template {}: {}", name, e);
        }
    }
    env
});

/// Render a template by name / 渲染模板
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    ENV.get_template(name)?.render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_compile() {
        for (name, _) in TEMPLATES {
            assert!(ENV.get_template(name).is_ok(), "template {} failed to compile", name);
        }
    }

    #[test]
    fn test_error_page_escapes() {
        let html = render("error.html", context! {
            title => "Movie Not Found",
            message => "<script>alert(1)</script>",
        })
        .unwrap();
        assert!(html.contains("Movie Not Found"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
