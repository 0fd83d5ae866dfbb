//! Contact section: direct channels plus a message form that drafts an
//! email in the system mail client.

use egui::{Button, Frame, OpenUrl, RichText, TextEdit, Ui};

use crate::content::Personal;
use crate::theme;
use crate::viewport::VisibilityObserver;

#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub struct ContactState {
    pub gate: VisibilityObserver,
    form: ContactForm,
    feedback: Option<String>,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            gate: VisibilityObserver::default(),
            form: ContactForm::default(),
            feedback: None,
        }
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the percent-encoded mailto URL for the filled form.
pub(crate) fn compose_mailto(recipient: &str, owner_name: &str, form: &ContactForm) -> String {
    let subject = if form.subject.is_empty() {
        "Contact from Portfolio"
    } else {
        form.subject.as_str()
    };
    let body = format!(
        "Hi {owner_name},\n\nName: {name}\nEmail: {email}\n\nMessage:\n{message}\n\nBest regards,\n{name}",
        name = form.name,
        email = form.email,
        message = form.message,
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(&body),
    )
}

/// A form is sendable once the sender is identifiable and says something.
pub(crate) fn form_ready(form: &ContactForm) -> bool {
    !form.name.trim().is_empty() && form.email.contains('@') && !form.message.trim().is_empty()
}

/// Chat link for a phone number in international notation.
pub(crate) fn whatsapp_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

pub fn render_contact(ui: &mut Ui, personal: &Personal, state: &mut ContactState) {
    ui.add_space(48.0);
    theme::section_heading(ui, "Get In ", "Touch");
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Have a project in mind or just want to say hello?")
                .color(theme::text::MUTED),
        );
    });
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        render_channels(&mut columns[0], personal);
        render_form(&mut columns[1], personal, state);
    });

    ui.add_space(48.0);
}

fn render_channels(ui: &mut Ui, personal: &Personal) {
    let channels: [(&str, &str, String); 4] = [
        ("✉", "Email", format!("mailto:{}", personal.email)),
        ("💼", "LinkedIn", personal.linkedin.to_string()),
        ("🐙", "GitHub", personal.github.to_string()),
        ("💬", "WhatsApp", whatsapp_url(personal.phone)),
    ];

    for (icon, label, url) in channels {
        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(14.0, 10.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(18.0));
                    ui.label(RichText::new(label).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(Button::new("Open").small()).clicked() {
                            ui.ctx().open_url(OpenUrl::new_tab(&url));
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }
}

fn render_form(ui: &mut Ui, personal: &Personal, state: &mut ContactState) {
    let width = ui.available_width();

    ui.add(
        TextEdit::singleline(&mut state.form.name)
            .hint_text("Your name")
            .desired_width(width),
    );
    ui.add_space(6.0);
    ui.add(
        TextEdit::singleline(&mut state.form.email)
            .hint_text("Your email")
            .desired_width(width),
    );
    ui.add_space(6.0);
    ui.add(
        TextEdit::singleline(&mut state.form.subject)
            .hint_text("Subject (optional)")
            .desired_width(width),
    );
    ui.add_space(6.0);
    ui.add(
        TextEdit::multiline(&mut state.form.message)
            .hint_text("Your message")
            .desired_rows(5)
            .desired_width(width),
    );
    ui.add_space(10.0);

    let ready = form_ready(&state.form);
    ui.horizontal(|ui| {
        let send = ui.add_enabled(
            ready,
            Button::new(RichText::new("Send Message").strong()).fill(theme::accent::BLUE),
        );
        if send.clicked() {
            let url = compose_mailto(personal.email, personal.name, &state.form);
            ui.ctx().open_url(OpenUrl::new_tab(url));
            state.feedback = Some("✓ Draft opened in your mail client".to_string());
            state.form = ContactForm::default();
        }
        if ui.add(Button::new("Clear").small()).clicked() {
            state.form = ContactForm::default();
            state.feedback = None;
        }
    });

    if !ready {
        ui.label(
            RichText::new("Name, a valid email and a message are required.")
                .small()
                .color(theme::text::MUTED),
        );
    }
    if let Some(feedback) = &state.feedback {
        ui.label(RichText::new(feedback).color(theme::accent::GREEN));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "I have a project\nfor you.".to_string(),
        }
    }

    #[test]
    fn mailto_addresses_the_recipient() {
        let url = compose_mailto("owner@example.com", "Owner", &form());
        assert!(url.starts_with("mailto:owner@example.com?subject="));
    }

    #[test]
    fn mailto_percent_encodes_subject_and_body() {
        let url = compose_mailto("owner@example.com", "Owner", &form());
        assert!(url.contains("subject=Hello%20there"));
        assert!(url.contains("Ada%20Lovelace"));
        // Raw spaces and newlines never appear in the URL.
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn empty_subject_gets_a_default() {
        let mut f = form();
        f.subject.clear();
        let url = compose_mailto("owner@example.com", "Owner", &f);
        assert!(url.contains("subject=Contact%20from%20Portfolio"));
    }

    #[test]
    fn form_requires_name_email_and_message() {
        assert!(form_ready(&form()));

        let mut missing_name = form();
        missing_name.name = "  ".to_string();
        assert!(!form_ready(&missing_name));

        let mut bad_email = form();
        bad_email.email = "not-an-email".to_string();
        assert!(!form_ready(&bad_email));

        let mut no_message = form();
        no_message.message.clear();
        assert!(!form_ready(&no_message));
    }

    #[test]
    fn whatsapp_url_strips_everything_but_digits() {
        assert_eq!(whatsapp_url("+918709805710"), "https://wa.me/918709805710");
        assert_eq!(whatsapp_url("+1 (555) 000-1234"), "https://wa.me/15550001234");
    }
}
