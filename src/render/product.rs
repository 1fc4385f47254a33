use crate::core::content::SiteContent;
use crate::core::cursor::Cursor;
use crate::domain::model::GalleryImage;
use crate::domain::ports::AssetResolver;
use crate::navigation::Route;
use crate::render::stars;
use maud::{html, Markup};

pub fn render(
    content: &SiteContent,
    assets: &dyn AssetResolver,
    gallery: &Cursor<GalleryImage>,
) -> Markup {
    let product = &content.product;
    let active = gallery.current();

    html! {
        nav aria-label="Breadcrumb" {
            ol.breadcrumb {
                li { a href=(Route::Home.path()) { "Home" } }
                li { (product.name) }
            }
        }
        section.product {
            div.gallery {
                div.main-image data-motion="tilt" {
                    img src=(assets.resolve(&active.src)) alt=(active.alt) draggable="false";
                }
                div.thumbs {
                    @for (i, image) in gallery.items().iter().enumerate() {
                        @let pressed = i == gallery.index();
                        button.thumb.active[pressed] type="button" data-image=(i)
                            aria-pressed=(if pressed { "true" } else { "false" }) {
                            img src=(assets.resolve(&image.src)) alt=(image.alt);
                        }
                    }
                }
            }
            div.details {
                h1 { (product.name) }
                p { (product.description) }
                div.price.card data-motion="fade-up" {
                    span.amount { (product.price) }
                    " "
                    (stars(product.rating))
                }
                div.actions {
                    button type="button" disabled { "Add to cart" }
                    " "
                    button type="button" disabled { "Buy now" }
                }
                ul.features.grid {
                    @for feature in &product.features {
                        li.card {
                            h4 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
        }
        section.specs {
            h2 { "Specifications" }
            dl.grid {
                @for row in &product.specs {
                    div.spec {
                        dt { (row.key) }
                        dd { (row.value) }
                    }
                }
            }
        }
        @if let Some(quote) = &product.review {
            section.reviews.card {
                h3 { "What people are saying" }
                blockquote { "“" (quote) "”" }
                (stars(product.rating))
            }
        }
        section.related {
            h2 { "You might also like" }
            div.grid {
                @for card in &product.related {
                    a.card href=(card.href) {
                        img src=(assets.resolve(&card.image)) alt=(card.title) loading="lazy";
                        h4 { (card.title) }
                    }
                }
            }
        }
    }
}
