use crate::domain::model::{ContactPayload, Receipt, SubmissionOutcome};
use crate::domain::ports::SubmissionService;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_email, validate_non_empty_string};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Loading => Some("Sending..."),
            FormStatus::Success => Some("Message sent! We'll get back soon."),
            FormStatus::Error => Some("Something went wrong. Please try again."),
        }
    }
}

/// Contact form state for one page view.
///
/// `submit` borrows the form mutably, so a form can never have more than
/// one submission in flight.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactPayload,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(fields: ContactPayload) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ContactPayload {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = match name {
            "name" => &mut self.fields.name,
            "email" => &mut self.fields.email,
            "message" => &mut self.fields.message,
            other => {
                return Err(SiteError::validation(format!(
                    "unknown contact field '{}'",
                    other
                )))
            }
        };
        *slot = value.into();
        Ok(())
    }

    fn check(&self) -> Result<()> {
        validate_non_empty_string("name", &self.fields.name)?;
        validate_non_empty_string("email", &self.fields.email)?;
        validate_email("email", &self.fields.email)?;
        validate_non_empty_string("message", &self.fields.message)?;
        Ok(())
    }

    fn as_form_error(err: SiteError) -> SiteError {
        match err {
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                SiteError::validation(format!("{}: {}", field, reason))
            }
            other => other,
        }
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<Receipt>
    where
        S: SubmissionService + ?Sized,
    {
        // What gets checked is exactly what gets sent.
        self.fields = self.fields.trimmed();
        if let Err(e) = self.check() {
            self.status = FormStatus::Error;
            return Err(Self::as_form_error(e));
        }

        self.status = FormStatus::Loading;
        tracing::debug!("Submitting contact form for {}", self.fields.email);

        match service.submit(&self.fields).await {
            Ok(SubmissionOutcome::Accepted) => {
                self.status = FormStatus::Success;
                self.fields = ContactPayload::default();
                tracing::info!("✅ Contact message accepted");
                Ok(Receipt::now(SubmissionOutcome::Accepted))
            }
            Ok(SubmissionOutcome::Rejected) => {
                self.status = FormStatus::Error;
                tracing::warn!("Contact message rejected");
                Ok(Receipt::now(SubmissionOutcome::Rejected))
            }
            Err(e) => {
                self.status = FormStatus::Error;
                tracing::error!("❌ Contact submission failed: {}", e);
                Err(e)
            }
        }
    }
}
