//! View renderer: turns content plus the current view state into HTML.
//!
//! Everything here is a pure function of its inputs. Pages carry the
//! `data-motion` hooks the client script animates, but no timelines.

pub mod about;
pub mod contact;
pub mod home;
pub mod journey;
pub mod layout;
pub mod product;

use crate::core::contact::FormStatus;
use crate::core::content::SiteContent;
use crate::core::cursor::{Cursor, StageCursor};
use crate::domain::model::GalleryImage;
use crate::domain::ports::AssetResolver;
use crate::navigation::Route;
use maud::{html, Markup};

/// The mutable parts of a page view the markup depends on.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub stage: StageCursor,
    pub gallery: Cursor<GalleryImage>,
    pub form_status: FormStatus,
}

impl ViewState {
    pub fn initial(content: &SiteContent) -> Self {
        Self {
            stage: content.stage_cursor(),
            gallery: content.gallery_cursor(),
            form_status: FormStatus::Idle,
        }
    }
}

pub fn render_route(
    route: Route,
    content: &SiteContent,
    assets: &dyn AssetResolver,
    state: &ViewState,
) -> String {
    let (title, body) = match route {
        Route::Home => (content.site.name.as_str(), home::render(content, assets)),
        Route::Journey => (
            content.journey.heading.as_str(),
            journey::render(content, assets, &state.stage),
        ),
        Route::Product => (
            content.product.name.as_str(),
            product::render(content, assets, &state.gallery),
        ),
        Route::About => (content.about.heading.as_str(), about::render(content, assets)),
        Route::Contact => (
            content.contact.heading.as_str(),
            contact::render(content, state.form_status),
        ),
    };
    layout::page(content, route, title, body).into_string()
}

pub(crate) fn stars(filled: u8) -> Markup {
    let filled = filled.min(5) as usize;
    html! {
        span.stars aria-label={ (filled) " out of 5 stars" } {
            ("★".repeat(filled))
            ("☆".repeat(5 - filled))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assets::PassthroughAssets;
    use crate::config::SiteConfig;

    fn content() -> SiteContent {
        SiteConfig::builtin().unwrap().into_content().unwrap()
    }

    #[test]
    fn test_content_text_is_escaped() {
        let mut content = content();
        content.home.heading = "<script>alert('hi')</script> & more".to_string();
        content.home.hero_image = "/x.jpg\" onerror=\"alert(1)".to_string();
        let state = ViewState::initial(&content);

        let html = render_route(Route::Home, &content, &PassthroughAssets, &state);

        assert!(html.contains("&lt;script&gt;alert('hi')&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("src=\"/x.jpg&quot; onerror=&quot;alert(1)\""));
    }

    #[test]
    fn test_page_title_names_route_and_site() {
        let content = content();
        let state = ViewState::initial(&content);

        let home = render_route(Route::Home, &content, &PassthroughAssets, &state);
        assert!(home.starts_with("<!DOCTYPE html>"));
        assert!(home.contains("<title>Butterfly</title>"));

        let about = render_route(Route::About, &content, &PassthroughAssets, &state);
        assert!(about.contains(&format!("<title>{} · Butterfly</title>", content.about.heading)));
    }

    #[test]
    fn test_stars() {
        assert!(stars(4).into_string().contains("★★★★☆"));
        assert!(stars(9).into_string().contains("★★★★★"));
        assert!(stars(0)
            .into_string()
            .contains("aria-label=\"0 out of 5 stars\""));
    }
}
