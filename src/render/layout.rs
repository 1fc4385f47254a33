use crate::core::content::SiteContent;
use crate::navigation::Route;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = r#"
:root { color-scheme: dark; --accent: #818cf8; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #0b0b12; color: #f5f5f7; line-height: 1.6; }
a { color: inherit; }
.site-header { position: sticky; top: 0; display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: rgba(11, 11, 18, 0.8); backdrop-filter: blur(8px); }
.site-header nav ul { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.site-header a[aria-current="page"] { color: var(--accent); }
.menu-toggle { display: none; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem; }
.card { border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1rem; padding: 1.5rem; background: rgba(255, 255, 255, 0.04); }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
img { max-width: 100%; border-radius: 1rem; }
.dot { display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #4b5563; }
.dot.reached, .dot.active { background: var(--accent); }
.status-success { color: #34d399; }
.status-error { color: #f87171; }
[data-motion] { transition: opacity 0.6s ease, transform 0.6s ease; }
@media (max-width: 640px) { .site-header nav ul { display: none; } .menu-toggle { display: block; } }
"#;

pub fn page(content: &SiteContent, route: Route, title: &str, body: Markup) -> Markup {
    let full_title = if title == content.site.name {
        content.site.name.clone()
    } else {
        format!("{} · {}", title, content.site.name)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(content.site.tagline);
                title { (full_title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body data-route=(route.path()) {
                (header(content, route))
                main { (body) }
                (footer(content))
            }
        }
    }
}

pub fn header(content: &SiteContent, active: Route) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { "🦋 " (content.site.name) }
            nav aria-label="Main" {
                ul {
                    @for route in Route::ALL {
                        li {
                            a href=(route.path()) aria-current=[(route == active).then_some("page")] {
                                (route.label())
                            }
                        }
                    }
                }
                button.menu-toggle type="button" aria-label="Toggle menu" aria-expanded="false" { "☰" }
            }
        }
    }
}

fn footer(content: &SiteContent) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (content.site.name) " · " (content.site.tagline) }
        }
    }
}
