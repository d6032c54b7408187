//! About page text

use crate::i18n::Bilingual;

#[derive(Debug)]
pub struct AboutText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub story_title: &'static str,
    pub story: [&'static str; 3],
    pub quick_facts: &'static str,
    pub age: &'static str,
    pub location: &'static str,
    pub education: &'static str,
    pub languages: &'static str,
    pub years: &'static str,
    pub spoken_languages: &'static str,
    pub current_status: &'static str,
    pub looking_for: &'static str,
    pub passions: &'static str,
    pub passion_tags: &'static [&'static str],
    pub values: &'static str,
    pub value_tags: &'static [&'static str],
    pub hobbies: &'static str,
    pub hobby_tags: &'static [&'static str],
}

pub static ABOUT: Bilingual<AboutText> = Bilingual::new(
    AboutText {
        title: "À propos de moi",
        subtitle: "Découvrez mon parcours, mes passions et ce qui me motive dans l'univers de l'infrastructure et du cloud.",
        intro: "Salut ! Je suis Corentin",
        story_title: "Mon histoire",
        story: [
            "Étudiant en B2 à Ynov Campus Toulouse, je suis passionné par l'infrastructure, les réseaux et les technologies cloud. Mon voyage dans l'univers informatique a commencé par une curiosité naturelle pour comprendre le fonctionnement des systèmes et créer des architectures robustes.",
            "Basé à Toulouse, je m'efforce de combiner théorie académique et pratique à travers des projets concrets d'infrastructure et des stages enrichissants. Je crois fermement au pouvoir des technologies cloud pour transformer les entreprises et optimiser leurs performances.",
            "Quand je ne configure pas de serveurs ou n'étudie pas les architectures cloud, j'aime explorer de nouvelles technologies d'infrastructure, contribuer à des projets open source et partager mes connaissances avec d'autres étudiants.",
        ],
        quick_facts: "En bref",
        age: "Âge",
        location: "Localisation",
        education: "Formation",
        languages: "Langues",
        years: "ans",
        spoken_languages: "Français, Anglais",
        current_status: "Statut actuel",
        looking_for: "Recherche de stage en infrastructure/cloud",
        passions: "Mes passions",
        passion_tags: &["Infrastructure", "Cloud Computing", "Réseaux", "DevOps", "Virtualisation"],
        values: "Mes valeurs",
        value_tags: &["Accessibilité", "Collaboration", "Apprentissage", "Innovation"],
        hobbies: "Loisirs",
        hobby_tags: &["Gaming", "Lecture Tech", "Musique", "Sci-Fi"],
    },
    AboutText {
        title: "About Me",
        subtitle: "Discover my journey, passions, and what drives me in the universe of infrastructure and cloud.",
        intro: "Hi! I'm Corentin",
        story_title: "My Story",
        story: [
            "B2 student at Ynov Campus Toulouse, I'm passionate about infrastructure, networking, and cloud technologies. My journey in the IT universe began with a natural curiosity to understand how systems work and create robust architectures.",
            "Based in Toulouse, I strive to combine academic theory with practice through concrete infrastructure projects and enriching internships. I firmly believe in the power of cloud technologies to transform businesses and optimize their performance.",
            "When I'm not configuring servers or studying cloud architectures, I enjoy exploring new infrastructure technologies, contributing to open source projects, and sharing knowledge with fellow students.",
        ],
        quick_facts: "Quick Facts",
        age: "Age",
        location: "Location",
        education: "Education",
        languages: "Languages",
        years: "years old",
        spoken_languages: "French, English",
        current_status: "Current Status",
        looking_for: "Looking for infrastructure/cloud internship",
        passions: "My passions",
        passion_tags: &["Infrastructure", "Cloud Computing", "Networking", "DevOps", "Virtualization"],
        values: "My values",
        value_tags: &["Accessibility", "Collaboration", "Learning", "Innovation"],
        hobbies: "Hobbies",
        hobby_tags: &["Gaming", "Tech Reading", "Music", "Sci-Fi"],
    },
);
