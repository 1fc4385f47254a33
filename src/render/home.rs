use crate::core::content::SiteContent;
use crate::domain::ports::AssetResolver;
use crate::navigation::Route;
use maud::{html, Markup};

pub fn render(content: &SiteContent, assets: &dyn AssetResolver) -> Markup {
    let home = &content.home;
    html! {
        section.hero {
            img src=(assets.resolve(&home.hero_image)) alt="Butterfly" loading="eager"
                fetchpriority="high" data-motion="parallax";
            div.hero-copy {
                h1 data-motion="fade-up" { (home.heading) }
                p data-motion="fade-up" { (home.subheading) }
                a.cta href=(Route::Journey.path()) data-motion="fade-up" { (home.cta_label) }
            }
        }
    }
}
