//! Contact methods and a controlled message form.
//!
//! Submitting validates the form, logs it and thanks the sender. Nothing is
//! transmitted or stored.

use std::fmt;

use log::info;

use crate::core::action::Action;
use crate::core::config::ResolvedProfile;
use crate::core::content::{ContactMethod, contact_methods};

use super::{Command, edit_text};

pub const THANK_YOU: &str = "Thanks for reaching out! I'll get back to you as soon as I can.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn required(self) -> bool {
        self != Field::Subject
    }

    fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Missing(Field),
    InvalidEmail,
}

impl FormError {
    /// The field the error is shown under.
    pub fn field(&self) -> Field {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidEmail => Field::Email,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "{} is required", field.label()),
            FormError::InvalidEmail => write!(f, "Email must contain '@'"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Every problem with the form, in field order.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors: Vec<FormError> = Field::ALL
            .into_iter()
            .filter(|f| f.required() && self.value(*f).trim().is_empty())
            .map(FormError::Missing)
            .collect();
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            errors.push(FormError::InvalidEmail);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub struct ContactPage {
    pub methods: Vec<ContactMethod>,
    pub form: ContactForm,
    pub focus: Field,
    pub errors: Vec<FormError>,
}

impl ContactPage {
    pub fn new(profile: &ResolvedProfile, github_username: &str) -> Self {
        Self {
            methods: contact_methods(profile, github_username),
            form: ContactForm::default(),
            focus: Field::Name,
            errors: Vec::new(),
        }
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match action {
            Action::FocusNext | Action::SelectNext => {
                self.focus = self.focus.next();
                Command::None
            }
            Action::FocusPrev | Action::SelectPrev => {
                self.focus = self.focus.prev();
                Command::None
            }
            Action::Submit => self.submit(),
            _ => {
                let field = self.focus;
                if edit_text(self.form.value_mut(field), action) {
                    self.errors.retain(|e| e.field() != field);
                }
                Command::None
            }
        }
    }

    /// Validates and "sends" the form.
    pub fn submit(&mut self) -> Command {
        match self.form.validate() {
            Ok(()) => {
                info!(
                    "Contact form submitted: name={:?} email={:?} subject={:?} message={} chars",
                    self.form.name,
                    self.form.email,
                    self.form.subject,
                    self.form.message.chars().count()
                );
                self.form = ContactForm::default();
                self.focus = Field::Name;
                self.errors.clear();
                Command::Notify(THANK_YOU.to_string())
            }
            Err(errors) => {
                let summary = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                if let Some(FormError::Missing(field)) = errors.first() {
                    self.focus = *field;
                }
                self.errors = errors;
                Command::Notify(summary)
            }
        }
    }
}
