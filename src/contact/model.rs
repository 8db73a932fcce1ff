use serde::{Deserialize, Deserializer, Serialize};

/// Labels offered by the contact form's "Services Needed" checkboxes.
pub const SERVICE_CATALOG: &[&str] = &[
    "Web Development",
    "UI/UX Design",
    "E-commerce",
    "SEO",
    "Database Design",
    "Database Management",
    "Data Migration",
    "Stored Procedures & Functions",
    "API Development",
    "Responsive Design",
    "Web Security",
    "Authentication & Authorization",
    "Cloud Deployment",
    "Version Control (Git)",
    "Performance Optimization",
];

/// A contact-form payload. Ephemeral: never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Ordered set of selected service labels.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<String>,
}

impl Submission {
    /// Add `label` when `checked`, remove it otherwise. Duplicates are never stored.
    pub fn toggle_service(&mut self, label: &str, checked: bool) {
        let present = self.services.iter().position(|s| s == label);
        match (checked, present) {
            (true, None) => self.services.push(label.to_string()),
            (false, Some(idx)) => {
                self.services.remove(idx);
            }
            _ => {}
        }
    }

    pub fn services_line(&self) -> String {
        if self.services.is_empty() {
            "None".to_string()
        } else {
            self.services.join(", ")
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of every relay response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
