use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Every field may be missing on the wire.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub budget: String,
    pub services: Vec<String>,
    pub project_description: String,
    pub selected_date: String,
    pub selected_time: String,
}

impl ContactRequest {
    pub fn has_appointment(&self) -> bool {
        !self.selected_date.trim().is_empty() && !self.selected_time.trim().is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn submitted() -> Self {
        Self {
            success: true,
            message: "Form submitted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: ContactRequest =
            serde_json::from_str(r#"{"name":"Ada","companyName":"Analytical"}"#).unwrap();
        assert_eq!(
            request,
            ContactRequest {
                name: "Ada".into(),
                company_name: "Analytical".into(),
                ..Default::default()
            }
        );
        assert!(!request.has_appointment());
    }

    #[test]
    fn test_appointment_needs_date_and_time() {
        let mut request = ContactRequest {
            selected_date: "2025-06-02".into(),
            ..Default::default()
        };
        assert!(!request.has_appointment());
        request.selected_time = "10:00 AM".into();
        assert!(request.has_appointment());
    }
}
