use crate::core::content::SiteContent;
use crate::domain::ports::AssetResolver;
use crate::navigation::Route;
use maud::{html, Markup};

pub fn render(content: &SiteContent, assets: &dyn AssetResolver) -> Markup {
    let about = &content.about;

    html! {
        section.about-hero data-motion="fade-up" {
            h1 { (about.heading) }
            p { (about.intro) }
        }
        section.mission {
            p { (about.mission) }
            div.grid {
                @for stat in &about.stats {
                    div.card.stat {
                        strong { (stat.value) }
                        span { (stat.label) }
                    }
                }
            }
        }
        section.values {
            div.grid {
                @for value in &about.values {
                    div.card {
                        span.icon { (value.icon) }
                        h3 { (value.title) }
                        p { (value.description) }
                    }
                }
            }
        }
        section.milestones {
            ol {
                @for milestone in &about.milestones {
                    li {
                        time { (milestone.year) }
                        h4 { (milestone.heading) }
                        p { (milestone.body) }
                    }
                }
            }
        }
        section.team {
            div.grid {
                @for member in &about.team {
                    figure.card {
                        img src=(assets.resolve(&member.image)) alt=(member.name) loading="lazy";
                        figcaption { strong { (member.name) } " " (member.role) }
                    }
                }
            }
        }
        section.cta { a href=(Route::Contact.path()) { "Get in touch" } }
    }
}
