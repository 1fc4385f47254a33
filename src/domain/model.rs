use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything that can live in a [`Sequence`](crate::core::sequence::Sequence):
/// items are addressed by a short id that must be unique within the sequence.
pub trait Identified {
    fn id(&self) -> &str;
}

/// One step of the lifecycle narrative shown on the journey page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Free-form label such as "3-7 days"; never parsed.
    #[serde(rename = "duration")]
    pub duration_label: String,
    /// Opaque image reference, resolved by an [`AssetResolver`](crate::domain::ports::AssetResolver).
    #[serde(rename = "image")]
    pub media_ref: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub fun_fact: Option<String>,
}

impl Identified for Stage {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl Identified for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub title: String,
    pub image: String,
    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Icon, title and a line of text: company values, journey facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub outcome: SubmissionOutcome,
    pub submitted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn now(outcome: SubmissionOutcome) -> Self {
        Self {
            outcome,
            submitted_at: Utc::now(),
        }
    }
}
