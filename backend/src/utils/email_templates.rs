use crate::api::mailer::OutgoingEmail;
use crate::config::relay_config::RelayConfig;
use crate::handlers::contact_dtos::ContactRequest;

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        escape_html(value)
    }
}

fn line(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>\n", label, or_na(value))
}

pub fn notification_html(request: &ContactRequest) -> String {
    let services = request.services.join(", ");

    let mut html = String::from("<h2>New Contact Form Submission</h2>\n");
    html.push_str("<h3>Contact Information</h3>\n");
    html.push_str(&line("Name", &request.name));
    html.push_str(&line("Email", &request.email));
    html.push_str(&line("Phone", &request.phone));
    html.push_str("<h3>Company Information</h3>\n");
    html.push_str(&line("Company Name", &request.company_name));
    html.push_str(&line("Budget", &request.budget));
    html.push_str(&line("Services", &services));
    html.push_str("<h3>Project Details</h3>\n");
    html.push_str(&line("Description", &request.project_description));
    html.push_str("<h3>Appointment</h3>\n");
    html.push_str(&line("Date", &request.selected_date));
    html.push_str(&line("Time", &request.selected_time));
    html
}

pub fn confirmation_html(request: &ContactRequest) -> String {
    let mut html = String::from("<h2>Thank you for reaching out!</h2>\n");
    html.push_str(&format!("<p>Hi {},</p>\n", escape_html(&request.name)));
    html.push_str("<p>We've received your message and will get back to you soon.</p>\n");
    if request.has_appointment() {
        html.push_str(&format!(
            "<p><strong>Scheduled Appointment:</strong> {} at {}</p>\n",
            escape_html(&request.selected_date),
            escape_html(&request.selected_time)
        ));
    }
    html.push_str("<p>Best regards,<br>The Aelio Team</p>\n");
    html
}

/// Internal notice sent to the studio inbox.
pub fn notification_email(config: &RelayConfig, request: &ContactRequest) -> OutgoingEmail {
    OutgoingEmail {
        from: config.contact_from.clone(),
        to: config.inbox.clone(),
        subject: format!("New Contact Form Submission from {}", request.name),
        html: notification_html(request),
    }
}

pub fn confirmation_email(config: &RelayConfig, request: &ContactRequest) -> OutgoingEmail {
    OutgoingEmail {
        from: config.confirmation_from.clone(),
        to: request.email.clone(),
        subject: "Thank you for contacting Aelio".to_string(),
        html: confirmation_html(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+44 20 0000".into(),
            company_name: "Analytical <Engines>".into(),
            budget: "$10K-$20K".into(),
            services: vec!["WEBSITE".into(), "BRANDING".into()],
            project_description: String::new(),
            selected_date: "2025-06-02".into(),
            selected_time: "10:00 AM".into(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_notification_sections_and_placeholders() {
        let html = notification_html(&request());
        assert!(html.contains("<p><strong>Name:</strong> Ada Lovelace</p>"));
        assert!(html.contains("<p><strong>Company Name:</strong> Analytical &lt;Engines&gt;</p>"));
        assert!(html.contains("<p><strong>Services:</strong> WEBSITE, BRANDING</p>"));
        assert!(html.contains("<p><strong>Description:</strong> N/A</p>"));
        assert!(html.contains("<h3>Appointment</h3>"));
    }

    #[test]
    fn test_empty_services_show_placeholder() {
        let html = notification_html(&ContactRequest::default());
        assert!(html.contains("<p><strong>Services:</strong> N/A</p>"));
        assert!(html.contains("<p><strong>Date:</strong> N/A</p>"));
    }

    #[test]
    fn test_confirmation_mentions_appointment_only_when_complete() {
        let with = confirmation_html(&request());
        assert!(with.contains("<p><strong>Scheduled Appointment:</strong> 2025-06-02 at 10:00 AM</p>"));

        let without = confirmation_html(&ContactRequest {
            selected_time: String::new(),
            ..request()
        });
        assert!(!without.contains("Scheduled Appointment"));
        assert!(without.contains("<p>Hi Ada Lovelace,</p>"));
    }

    #[test]
    fn test_emails_are_addressed_from_config() {
        let config = RelayConfig::from_lookup(|_| None);
        let notice = notification_email(&config, &request());
        assert_eq!(notice.to, "info@aelio.dev");
        assert_eq!(notice.from, "Aelio Contact <onboarding@resend.dev>");
        assert_eq!(notice.subject, "New Contact Form Submission from Ada Lovelace");

        let thanks = confirmation_email(&config, &request());
        assert_eq!(thanks.to, "ada@example.com");
        assert_eq!(thanks.from, "Aelio <onboarding@resend.dev>");
        assert_eq!(thanks.subject, "Thank you for contacting Aelio");
    }
}
