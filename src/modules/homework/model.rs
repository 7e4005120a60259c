use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed response: {0}")]
    Shape(&'static str),
    #[error("response has no \"{0}\" field")]
    MissingField(&'static str),
    #[error("unknown homework status \"{0}\"")]
    UnknownStatus(String),
}

/// Review states a homework can be in, as reported by the Practicum API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status, used verbatim in notifications.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "reviewed, no issues — approved",
            Self::Reviewing => "taken up for review",
            Self::Rejected => "reviewed, issues found — rejected",
        }
    }
}

/// A single tracked homework extracted from the API payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Parse one homework record out of the raw payload.
    ///
    /// The payload is untrusted, so every field is checked by hand: each
    /// failure names the field that is missing or bad instead of collapsing
    /// into a generic deserialization error.
    pub fn from_value(raw: &Value) -> Result<Self, PayloadError> {
        let status = raw
            .get("status")
            .ok_or(PayloadError::MissingField("status"))?;

        let name = raw
            .get("homework_name")
            .ok_or(PayloadError::MissingField("homework_name"))?
            .as_str()
            .ok_or(PayloadError::Shape("\"homework_name\" is not a string"))?;

        let status = status
            .as_str()
            .ok_or(PayloadError::Shape("\"status\" is not a string"))?;

        let status = HomeworkStatus::parse(status)
            .ok_or_else(|| PayloadError::UnknownStatus(status.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    /// Notification text for this homework's current status.
    pub fn message(&self) -> String {
        format!(
            "Review status changed for \"{}\": {}",
            self.name,
            self.status.verdict()
        )
    }
}
