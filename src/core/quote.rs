//! Quote request domain model and validation.
//!
//! The form edits a [`QuoteDraft`] (raw strings); [`QuoteDraft::validate`]
//! runs a static table of per-field validators and either aggregates
//! [`FieldErrors`] or produces a typed [`QuoteRequest`] ready for the intake
//! endpoint. The same validation runs on the client before submitting and on
//! the server before accepting.

use serde::{Deserialize, Serialize};

/// Managed service tier requested by the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Starter,
    Professional,
    Enterprise,
    Custom,
}

impl ServiceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Starter => "starter",
            ServiceTier::Professional => "professional",
            ServiceTier::Enterprise => "enterprise",
            ServiceTier::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "starter" => Some(ServiceTier::Starter),
            "professional" => Some(ServiceTier::Professional),
            "enterprise" => Some(ServiceTier::Enterprise),
            "custom" => Some(ServiceTier::Custom),
            _ => None,
        }
    }

    /// `(value, label)` pairs for the form's `<select>`.
    pub fn options() -> Vec<(String, String)> {
        vec![
            ("starter".into(), "Starter - $2,500/month".into()),
            ("professional".into(), "Professional - $7,500/month".into()),
            ("enterprise".into(), "Enterprise - Custom pricing".into()),
            ("custom".into(), "Custom solution".into()),
        ]
    }
}

/// Deployment infrastructure preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Infrastructure {
    Cloud,
    Hybrid,
    Onpremise,
    Flexible,
}

impl Infrastructure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Infrastructure::Cloud => "cloud",
            Infrastructure::Hybrid => "hybrid",
            Infrastructure::Onpremise => "onpremise",
            Infrastructure::Flexible => "flexible",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cloud" => Some(Infrastructure::Cloud),
            "hybrid" => Some(Infrastructure::Hybrid),
            "onpremise" => Some(Infrastructure::Onpremise),
            "flexible" => Some(Infrastructure::Flexible),
            _ => None,
        }
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            ("cloud".into(), "Cloud-hosted (AWS/Azure/GCP)".into()),
            ("hybrid".into(), "Hybrid deployment".into()),
            ("onpremise".into(), "On-premise".into()),
            ("flexible".into(), "Flexible/Discuss".into()),
        ]
    }
}

/// Implementation timeline requested by the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Immediate,
    Month,
    Quarter,
    Flexible,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::Month => "month",
            Timeline::Quarter => "quarter",
            Timeline::Flexible => "flexible",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "immediate" => Some(Timeline::Immediate),
            "month" => Some(Timeline::Month),
            "quarter" => Some(Timeline::Quarter),
            "flexible" => Some(Timeline::Flexible),
            _ => None,
        }
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            ("immediate".into(), "Immediate (< 2 weeks)".into()),
            ("month".into(), "Within 1 month".into()),
            ("quarter".into(), "Within 3 months".into()),
            ("flexible".into(), "Flexible timeline".into()),
        ]
    }
}

/// Monthly budget range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under-5k")]
    Under5k,
    #[serde(rename = "5k-15k")]
    From5kTo15k,
    #[serde(rename = "15k-50k")]
    From15kTo50k,
    #[serde(rename = "50k-plus")]
    Over50k,
    #[serde(rename = "discuss")]
    Discuss,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Under5k => "under-5k",
            Budget::From5kTo15k => "5k-15k",
            Budget::From15kTo50k => "15k-50k",
            Budget::Over50k => "50k-plus",
            Budget::Discuss => "discuss",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "under-5k" => Some(Budget::Under5k),
            "5k-15k" => Some(Budget::From5kTo15k),
            "15k-50k" => Some(Budget::From15kTo50k),
            "50k-plus" => Some(Budget::Over50k),
            "discuss" => Some(Budget::Discuss),
            _ => None,
        }
    }

    pub fn options() -> Vec<(String, String)> {
        vec![
            ("under-5k".into(), "Under $5,000".into()),
            ("5k-15k".into(), "$5,000 - $15,000".into()),
            ("15k-50k".into(), "$15,000 - $50,000".into()),
            ("50k-plus".into(), "$50,000+".into()),
            ("discuss".into(), "Prefer to discuss".into()),
        ]
    }
}

/// Required form fields, used to address entries in [`FieldErrors`] and the
/// validation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    ServiceType,
    Infrastructure,
    Timeline,
    Budget,
    Requirements,
}

/// One optional error message per required field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub infrastructure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub requirements: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&String> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Company => self.company.as_ref(),
            Field::ServiceType => self.service_type.as_ref(),
            Field::Infrastructure => self.infrastructure.as_ref(),
            Field::Timeline => self.timeline.as_ref(),
            Field::Budget => self.budget.as_ref(),
            Field::Requirements => self.requirements.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, message: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::ServiceType => &mut self.service_type,
            Field::Infrastructure => &mut self.infrastructure,
            Field::Timeline => &mut self.timeline,
            Field::Budget => &mut self.budget,
            Field::Requirements => &mut self.requirements,
        };
        *slot = Some(message);
    }

    pub fn take(&mut self, field: Field) -> Option<String> {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::ServiceType => &mut self.service_type,
            Field::Infrastructure => &mut self.infrastructure,
            Field::Timeline => &mut self.timeline,
            Field::Budget => &mut self.budget,
            Field::Requirements => &mut self.requirements,
        };
        slot.take()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.company.is_none()
            && self.service_type.is_none()
            && self.infrastructure.is_none()
            && self.timeline.is_none()
            && self.budget.is_none()
            && self.requirements.is_none()
    }

    pub fn count(&self) -> usize {
        [
            Field::Name,
            Field::Email,
            Field::Company,
            Field::ServiceType,
            Field::Infrastructure,
            Field::Timeline,
            Field::Budget,
            Field::Requirements,
        ]
        .iter()
        .filter(|f| self.get(**f).is_some())
        .count()
    }
}

/// Raw form state before validation. All fields are plain strings so the
/// form can bind them directly to inputs; the enumerated fields hold the
/// `<select>` value (empty until the user picks one).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub infrastructure: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub additional_info: String,
}

/// Validated lead record, sent exactly once per submit action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    pub service_type: ServiceTier,
    pub infrastructure: Infrastructure,
    pub timeline: Timeline,
    pub budget: Budget,
    pub requirements: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub additional_info: Option<String>,
}

type Validator = fn(&QuoteDraft) -> Option<String>;

/// Static validation table: one validator per required field, run in form
/// order on every submit.
pub const VALIDATION_TABLE: &[(Field, Validator)] = &[
    (Field::Name, validate_name),
    (Field::Email, validate_email),
    (Field::Company, validate_company),
    (Field::ServiceType, validate_service_type),
    (Field::Infrastructure, validate_infrastructure),
    (Field::Timeline, validate_timeline),
    (Field::Budget, validate_budget),
    (Field::Requirements, validate_requirements),
];

fn validate_name(draft: &QuoteDraft) -> Option<String> {
    if draft.name.trim().is_empty() {
        Some("Name is required".to_string())
    } else {
        None
    }
}

fn validate_email(draft: &QuoteDraft) -> Option<String> {
    let value = draft.email.trim();
    if value.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(value) {
        Some("Invalid email address".to_string())
    } else {
        None
    }
}

fn validate_company(draft: &QuoteDraft) -> Option<String> {
    if draft.company.trim().is_empty() {
        Some("Company is required".to_string())
    } else {
        None
    }
}

fn validate_service_type(draft: &QuoteDraft) -> Option<String> {
    if ServiceTier::parse(&draft.service_type).is_none() {
        Some("Service type is required".to_string())
    } else {
        None
    }
}

fn validate_infrastructure(draft: &QuoteDraft) -> Option<String> {
    if Infrastructure::parse(&draft.infrastructure).is_none() {
        Some("Infrastructure preference is required".to_string())
    } else {
        None
    }
}

fn validate_timeline(draft: &QuoteDraft) -> Option<String> {
    if Timeline::parse(&draft.timeline).is_none() {
        Some("Timeline is required".to_string())
    } else {
        None
    }
}

fn validate_budget(draft: &QuoteDraft) -> Option<String> {
    if Budget::parse(&draft.budget).is_none() {
        Some("Budget range is required".to_string())
    } else {
        None
    }
}

fn validate_requirements(draft: &QuoteDraft) -> Option<String> {
    if draft.requirements.trim().is_empty() {
        Some("Requirements are required".to_string())
    } else {
        None
    }
}

/// Standard address syntax: `local@domain.tld` with a sane local charset,
/// a dotted domain and an alphabetic TLD of at least two letters.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

impl QuoteDraft {
    /// Run the full validation table. Returns the typed record when every
    /// required field passes, or one message per failing field.
    pub fn validate(&self) -> Result<QuoteRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        for (field, check) in VALIDATION_TABLE {
            if let Some(message) = check(self) {
                errors.set(*field, message);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        match (
            ServiceTier::parse(&self.service_type),
            Infrastructure::parse(&self.infrastructure),
            Timeline::parse(&self.timeline),
            Budget::parse(&self.budget),
        ) {
            (Some(service_type), Some(infrastructure), Some(timeline), Some(budget)) => {
                Ok(QuoteRequest {
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    company: self.company.trim().to_string(),
                    phone: non_empty(&self.phone),
                    service_type,
                    infrastructure,
                    timeline,
                    budget,
                    requirements: self.requirements.trim().to_string(),
                    additional_info: non_empty(&self.additional_info),
                })
            }
            _ => {
                errors.set(Field::ServiceType, "Service type is required".to_string());
                Err(errors)
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Visual state of the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Fields editable, submit enabled.
    #[default]
    Editing,
    /// One submission in flight; submit control is inert.
    Submitting,
    /// Submission accepted; form cleared, thank-you card shown.
    Submitted,
}

impl FormPhase {
    /// Only `Editing` may start a submission, so a second submit while one
    /// is in flight is blocked.
    pub fn can_submit(&self) -> bool {
        matches!(self, FormPhase::Editing)
    }
}
