//! Contact - Internship Proposal Form
//!
//! The form only collects fields; nothing is sent anywhere.

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Company,
    Position,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Company,
        ContactField::Position,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Whether the field is multi-line
    pub fn is_multiline(self) -> bool {
        self == ContactField::Message
    }
}

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub position: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Company => &self.company,
            ContactField::Position => &self.position,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Company => &mut self.company,
            ContactField::Position => &mut self.position,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
