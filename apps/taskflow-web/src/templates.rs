//! Page templates, embedded at compile time.

use minijinja::Environment;

/// Build the template environment with every page registered.
///
/// Templates are embedded with `include_str!`, so a malformed template is
/// caught the first time the environment is built (in practice: at startup
/// and in every page test).
pub fn build() -> Environment<'static> {
    let mut env = Environment::new();

    let pages = [
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("detail.html", include_str!("../templates/detail.html")),
        ("form.html", include_str!("../templates/form.html")),
        ("not_found.html", include_str!("../templates/not_found.html")),
    ];

    for (name, source) in pages {
        if let Err(e) = env.add_template(name, source) {
            // Unreachable for the embedded set unless a template is broken
            // at build time; fail loudly rather than serve half a site.
            panic!("invalid embedded template {name}: {e}");
        }
    }

    env
}
