//! Contact page text

use crate::domain::ContactField;
use crate::i18n::Bilingual;

#[derive(Debug)]
pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub status: &'static str,
    pub status_value: &'static str,
    pub send_message: &'static str,
    pub response_time: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub social_links: &'static str,
    pub social_desc: &'static str,
    pub availability: &'static str,
    pub availability_value: &'static str,
    pub contact_info: &'static str,
}

impl ContactText {
    /// Label above a form field
    pub fn field_label(&self, field: ContactField) -> &'static str {
        match field {
            ContactField::FirstName => self.first_name,
            ContactField::LastName => self.last_name,
            ContactField::Company => self.company,
            ContactField::Position => self.position,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }

    /// Placeholder for a form field
    pub fn field_placeholder(&self, field: ContactField) -> &'static str {
        match field {
            ContactField::FirstName => "Jean",
            ContactField::LastName => "Dupont",
            ContactField::Company => "ACME Corp",
            ContactField::Position => "Infrastructure",
            ContactField::Email => "contact@entreprise.com",
            ContactField::Message => self.message_placeholder,
        }
    }
}

pub static CONTACT: Bilingual<ContactText> = Bilingual::new(
    ContactText {
        title: "Collaborons ensemble",
        subtitle: "Vous êtes une entreprise à la recherche d'un stagiaire en infrastructure, réseau ou cloud ? N'hésitez pas à me contacter pour discuter d'opportunités de stage ou de projets.",
        email: "Email",
        location: "Localisation",
        status: "Statut",
        status_value: "Étudiant en infrastructure & cloud - Recherche de stage",
        send_message: "Proposer une opportunité",
        response_time: "Je vous répondrai rapidement pour discuter de votre proposition.",
        first_name: "Prénom",
        last_name: "Nom",
        company: "Entreprise",
        position: "Poste",
        message: "Votre proposition",
        message_placeholder: "Décrivez votre entreprise, le poste proposé (infrastructure, réseau, cloud), les missions, la durée du stage...",
        send: "Envoyer la proposition",
        social_links: "Mes profils",
        social_desc: "Retrouvez-moi sur mes différentes plateformes.",
        availability: "Disponibilité",
        availability_value: "Disponible pour un stage dès maintenant",
        contact_info: "Informations de contact",
    },
    ContactText {
        title: "Let's work together",
        subtitle: "Are you a company looking for a motivated intern in infrastructure, networking, or cloud? Feel free to contact me to discuss internship opportunities or projects.",
        email: "Email",
        location: "Location",
        status: "Status",
        status_value: "Infrastructure & Cloud Student - Looking for internship",
        send_message: "Propose an opportunity",
        response_time: "I'll respond quickly to discuss your proposal.",
        first_name: "First Name",
        last_name: "Last Name",
        company: "Company",
        position: "Position",
        message: "Your proposal",
        message_placeholder: "Describe your company, the proposed position (infrastructure, networking, cloud), missions, internship duration...",
        send: "Send proposal",
        social_links: "My profiles",
        social_desc: "Find me on my different platforms.",
        availability: "Availability",
        availability_value: "Available for internship immediately",
        contact_info: "Contact Information",
    },
);
