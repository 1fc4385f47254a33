use crate::core::content::{JourneyContent, ProductContent, SiteContent};
use crate::core::sequence::Sequence;
use crate::domain::model::{
    Feature, GalleryImage, Highlight, Milestone, RelatedCard, SpecRow, Stage, Stat, TeamMember,
};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_range,
    validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// Content shipped with the binary, used when no `--config` is given.
pub const DEFAULT_CONTENT: &str = include_str!("../../content/butterfly.toml");

pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 900;
const MAX_SUBMISSION_DELAY_MS: u64 = 30_000;
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg", "avif"];

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub assets: Option<AssetsConfig>,
    pub submission: Option<SubmissionConfig>,
    pub home: HomeConfig,
    pub journey: JourneyConfig,
    pub product: ProductConfig,
    pub about: AboutConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub output_path: String,
    pub archive: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub public_dir: String,
    pub fallback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    #[default]
    Simulated,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub mode: SubmissionMode,
    pub delay_ms: Option<u64>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeConfig {
    pub heading: String,
    pub subheading: String,
    pub hero_image: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyConfig {
    pub heading: String,
    pub intro: String,
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub facts: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub description: String,
    pub price: String,
    pub rating: Option<u8>,
    pub review: Option<String>,
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub specs: Vec<SpecRow>,
    #[serde(default)]
    pub related: Vec<RelatedCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutConfig {
    pub heading: String,
    pub intro: String,
    pub mission: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub values: Vec<Highlight>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub location: String,
    pub hours: String,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONTENT)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> &str {
        &self.site.output_path
    }

    pub fn archive_enabled(&self) -> bool {
        self.site.archive.unwrap_or(false)
    }

    pub fn submission_mode(&self) -> SubmissionMode {
        self.submission.as_ref().map(|s| s.mode).unwrap_or_default()
    }

    pub fn submission_delay(&self) -> Duration {
        let millis = self
            .submission
            .as_ref()
            .and_then(|s| s.delay_ms)
            .unwrap_or(DEFAULT_SUBMISSION_DELAY_MS);
        Duration::from_millis(millis)
    }

    pub fn submission_endpoint(&self) -> Option<&str> {
        self.submission.as_ref().and_then(|s| s.endpoint.as_deref())
    }

    pub fn submission_timeout(&self) -> Duration {
        let secs = self
            .submission
            .as_ref()
            .and_then(|s| s.timeout_seconds)
            .unwrap_or(10);
        Duration::from_secs(secs)
    }

    /// Validates, then freezes the stage list and gallery into sequences.
    /// Fails with `ConfigError` if either is empty or repeats an id.
    pub fn into_content(self) -> Result<SiteContent> {
        self.validate()?;

        let stages = Arc::new(Sequence::named("journey.stages", self.journey.stages)?);
        let gallery = Arc::new(Sequence::named("product.images", self.product.images)?);

        Ok(SiteContent {
            site: self.site,
            home: self.home,
            journey: JourneyContent {
                heading: self.journey.heading,
                intro: self.journey.intro,
                stages,
                facts: self.journey.facts,
            },
            product: ProductContent {
                name: self.product.name,
                description: self.product.description,
                price: self.product.price,
                rating: self.product.rating.unwrap_or(5),
                review: self.product.review,
                gallery,
                features: self.product.features,
                specs: self.product.specs,
                related: self.product.related,
            },
            about: self.about,
            contact: self.contact,
        })
    }

    fn validate_stages(&self) -> Result<()> {
        for (i, stage) in self.journey.stages.iter().enumerate() {
            let prefix = format!("journey.stages[{}]", i);
            validate_non_empty_string(&format!("{}.id", prefix), &stage.id)?;
            validate_non_empty_string(&format!("{}.title", prefix), &stage.title)?;
            validate_non_empty_string(&format!("{}.subtitle", prefix), &stage.subtitle)?;
            validate_non_empty_string(&format!("{}.description", prefix), &stage.description)?;
        }

        let images: Vec<String> = self
            .journey
            .stages
            .iter()
            .map(|s| s.media_ref.clone())
            .collect();
        validate_file_extensions("journey.stages.image", &images, IMAGE_EXTENSIONS)
    }

    fn validate_submission(&self) -> Result<()> {
        let Some(submission) = &self.submission else {
            return Ok(());
        };

        if let Some(delay) = submission.delay_ms {
            validate_range("submission.delay_ms", delay, 0, MAX_SUBMISSION_DELAY_MS)?;
        }

        if submission.mode == SubmissionMode::Http {
            let endpoint = validate_required_field("submission.endpoint", &submission.endpoint)?;
            validate_url("submission.endpoint", endpoint)?;
        }

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_path("site.output_path", &self.site.output_path)?;

        if let Some(assets) = &self.assets {
            validate_path("assets.public_dir", &assets.public_dir)?;
            validate_non_empty_string("assets.fallback", &assets.fallback)?;
        }

        self.validate_stages()?;
        self.validate_submission()?;

        let gallery: Vec<String> = self.product.images.iter().map(|i| i.src.clone()).collect();
        validate_file_extensions("product.images", &gallery, IMAGE_EXTENSIONS)?;

        if let Some(rating) = self.product.rating {
            validate_range("product.rating", rating, 0, 5)?;
        }

        if self.contact.email.trim().is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "contact.email".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_content_is_valid() {
        let config = SiteConfig::builtin().unwrap();
        assert_eq!(config.site.name, "Butterfly");
        assert_eq!(config.submission_mode(), SubmissionMode::Simulated);
        assert_eq!(config.submission_delay(), Duration::from_millis(900));

        let content = config.into_content().unwrap();
        let ids: Vec<&str> = content.journey.stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["egg", "larva", "pupa", "adult"]);
        assert_eq!(content.product.gallery.len(), 2);
    }

    #[test]
    fn test_empty_stage_list_fails_fast() {
        let mut config = SiteConfig::builtin().unwrap();
        config.journey.stages.clear();
        let err = config.into_content().unwrap_err();
        assert!(matches!(err, SiteError::ConfigError { .. }));
    }

    #[test]
    fn test_duplicate_stage_ids_fail_fast() {
        let mut config = SiteConfig::builtin().unwrap();
        let copy = config.journey.stages[0].clone();
        config.journey.stages.push(copy);
        let err = config.into_content().unwrap_err();
        assert!(matches!(err, SiteError::ConfigError { .. }));
    }

    #[test]
    fn test_gallery_errors_name_the_gallery() {
        let mut config = SiteConfig::builtin().unwrap();
        config.product.images.clear();
        let err = config.into_content().unwrap_err();
        assert!(err.to_string().contains("product.images needs at least one entry"));

        let mut config = SiteConfig::builtin().unwrap();
        let copy = config.product.images[0].clone();
        config.product.images.push(copy);
        let err = config.into_content().unwrap_err();
        assert!(err.to_string().contains("in product.images"));
        assert!(!err.to_string().contains("journey"));
    }

    #[test]
    fn test_blank_stage_title_is_invalid() {
        let mut config = SiteConfig::builtin().unwrap();
        config.journey.stages[1].title = "  ".to_string();
        let err = config.validate().unwrap_err();
        match err {
            SiteError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "journey.stages[1].title")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_mode_requires_endpoint() {
        let mut config = SiteConfig::builtin().unwrap();
        config.submission = Some(SubmissionConfig {
            mode: SubmissionMode::Http,
            delay_ms: None,
            endpoint: None,
            timeout_seconds: None,
        });
        assert!(matches!(
            config.validate().unwrap_err(),
            SiteError::MissingConfigError { .. }
        ));

        config.submission.as_mut().unwrap().endpoint = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.submission.as_mut().unwrap().endpoint =
            Some("https://api.example.com/contact".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BUTTERFLY_TEST_ENDPOINT", "https://forms.example.com/hook");

        let toml_content = DEFAULT_CONTENT.replace(
            "mode = \"simulated\"",
            "mode = \"http\"\nendpoint = \"${BUTTERFLY_TEST_ENDPOINT}\"",
        );
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(
            config.submission_endpoint(),
            Some("https://forms.example.com/hook")
        );

        std::env::remove_var("BUTTERFLY_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = DEFAULT_CONTENT.replace("name = \"Butterfly\"\ntagline", "name = \"Moth\"\ntagline");
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "Moth");
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[site\nname = ").unwrap_err();
        assert!(matches!(err, SiteError::TomlError(_)));
    }
}
