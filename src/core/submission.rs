//! Enquiry form data model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Raw values of the enquiry form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub qualification: String,
    pub message: String,
}

/// One submitted enquiry, as stored in the local backup list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub qualification: String,
    pub message: String,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
}

impl FormSubmission {
    /// Stamp the form fields with the given submission time.
    pub fn new(fields: FormFields, at: DateTime<Utc>) -> Self {
        Self {
            full_name: fields.full_name,
            email: fields.email,
            phone: fields.phone,
            program: fields.program,
            qualification: fields.qualification,
            message: fields.message,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Stamp the form fields with the current time.
    pub fn now(fields: FormFields) -> Self {
        Self::new(fields, Utc::now())
    }
}
