use crate::core::content::SiteContent;
use crate::domain::ports::{AssetResolver, Storage};
use crate::navigation::Route;
use crate::render::{render_route, ViewState};
use crate::utils::error::Result;
use std::io::{Cursor as IoCursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

pub const ARCHIVE_NAME: &str = "site.zip";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub route: Route,
    pub path: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub pages: Vec<String>,
    pub archive: Option<String>,
}

/// Renders every route and writes the pages through a [`Storage`].
pub struct SiteBuilder<S: Storage, A: AssetResolver> {
    storage: S,
    assets: A,
    archive: bool,
}

impl<S: Storage, A: AssetResolver> SiteBuilder<S, A> {
    pub fn new(storage: S, assets: A) -> Self {
        Self {
            storage,
            assets,
            archive: false,
        }
    }

    pub fn with_archive(mut self, archive: bool) -> Self {
        self.archive = archive;
        self
    }

    pub fn render_all(&self, content: &SiteContent, state: &ViewState) -> Vec<RenderedPage> {
        Route::ALL
            .iter()
            .map(|&route| RenderedPage {
                route,
                path: route.output_file(),
                html: render_route(route, content, &self.assets, state),
            })
            .collect()
    }

    pub async fn build(&self, content: &SiteContent, state: &ViewState) -> Result<BuildReport> {
        tracing::info!("Rendering {} routes", Route::ALL.len());
        let pages = self.render_all(content, state);

        let mut written = Vec::with_capacity(pages.len());
        for page in &pages {
            self.storage
                .write_file(&page.path, page.html.as_bytes())
                .await?;
            tracing::debug!("Wrote {} ({} bytes)", page.path, page.html.len());
            written.push(page.path.clone());
        }

        let archive = if self.archive {
            let data = pack(&pages)?;
            self.storage.write_file(ARCHIVE_NAME, &data).await?;
            tracing::info!("📦 Packed {} pages into {}", pages.len(), ARCHIVE_NAME);
            Some(ARCHIVE_NAME.to_string())
        } else {
            None
        };

        Ok(BuildReport {
            pages: written,
            archive,
        })
    }
}

fn pack(pages: &[RenderedPage]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(IoCursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for page in pages {
        zip.start_file(page.path.as_str(), options)?;
        zip.write_all(page.html.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}
