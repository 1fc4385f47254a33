use anyhow::Result;
use butterfly_site::navigation::Route;
use butterfly_site::render::{render_route, ViewState};
use butterfly_site::{FormStatus, LocalStorage, SiteBuilder, SiteConfig, StaticAssets};
use tempfile::TempDir;

fn public_dir_with(files: &[&str]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for file in files {
        let path = dir.path().join(file.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, b"image")?;
    }
    Ok(dir)
}

#[tokio::test]
async fn test_build_writes_site_to_disk() -> Result<()> {
    let output = TempDir::new()?;
    let public = public_dir_with(&["/photo-1599631438215-75bc2640feb8.jpeg"])?;

    let content = SiteConfig::builtin()?.into_content()?;
    let state = ViewState::initial(&content);
    let assets = StaticAssets::new(public.path(), "/photo-1599631438215-75bc2640feb8.jpeg");
    let builder = SiteBuilder::new(LocalStorage::new(output.path()), assets).with_archive(true);

    let report = builder.build(&content, &state).await?;

    assert_eq!(report.pages.len(), Route::ALL.len());
    for route in Route::ALL {
        assert!(
            output.path().join(route.output_file()).is_file(),
            "missing page for {}",
            route.path()
        );
    }
    assert!(output.path().join("site.zip").is_file());

    // The home hero image is not in the public dir, so it falls back.
    let home = std::fs::read_to_string(output.path().join("index.html"))?;
    assert!(home.contains("src=\"/photo-1599631438215-75bc2640feb8.jpeg\""));
    assert!(!home.contains("photo-1587405254461"));
    assert!(home.contains("aria-current=\"page\">Home<"));
    Ok(())
}

#[test]
fn test_journey_page_reflects_cursor() -> Result<()> {
    let content = SiteConfig::builtin()?.into_content()?;
    let mut state = ViewState::initial(&content);
    state.stage.jump_to(2)?;

    let html = render_route(
        Route::Journey,
        &content,
        &butterfly_site::adapters::assets::PassthroughAssets,
        &state,
    );

    assert!(html.contains("data-stage-index=\"2\""));
    assert!(html.contains("Phase 3 of 4"));
    assert!(html.contains("Pupa (Chrysalis)"));
    assert!(html.contains("75% Complete"));
    assert!(html.contains("🔄 Final"));
    assert!(html.contains("Larva Stage"));
    assert!(html.contains("the caterpillar's body breaks down"));
    assert_eq!(html.matches("class=\"stage-card").count(), 4);
    assert_eq!(html.matches("class=\"dot reached\"").count(), 3);
    Ok(())
}

#[test]
fn test_product_page_marks_active_thumbnail() -> Result<()> {
    let content = SiteConfig::builtin()?.into_content()?;
    let mut state = ViewState::initial(&content);
    state.gallery.advance();

    let html = render_route(
        Route::Product,
        &content,
        &butterfly_site::adapters::assets::PassthroughAssets,
        &state,
    );

    assert!(html.contains("data-image=\"1\" aria-pressed=\"true\""));
    assert!(html.contains("data-image=\"0\" aria-pressed=\"false\""));
    assert!(html.contains("$249"));
    assert!(html.contains("Add to cart"));
    assert!(html.contains("Specifications"));
    Ok(())
}

#[test]
fn test_contact_page_shows_status() -> Result<()> {
    let content = SiteConfig::builtin()?.into_content()?;
    let mut state = ViewState::initial(&content);

    let idle = render_route(
        Route::Contact,
        &content,
        &butterfly_site::adapters::assets::PassthroughAssets,
        &state,
    );
    assert!(idle.contains("Send message →"));
    assert!(!idle.contains("role=\"status\""));

    state.form_status = FormStatus::Success;
    let sent = render_route(
        Route::Contact,
        &content,
        &butterfly_site::adapters::assets::PassthroughAssets,
        &state,
    );
    assert!(sent.contains("Message sent! We'll get back soon."));
    assert!(sent.contains("role=\"status\""));
    assert!(sent.contains("mailto:hello@butterfly.app"));
    Ok(())
}
