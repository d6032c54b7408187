//! Home page text

use crate::i18n::Bilingual;

#[derive(Debug)]
pub struct HomeText {
    pub greeting: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub view_projects: &'static str,
    pub intro_title: &'static str,
    pub intro_subtitle: &'static str,
    /// (title, description) cards
    pub intro_cards: [(&'static str, &'static str); 3],
    pub cta_title: &'static str,
    pub cta_subtitle: &'static str,
    pub cta_about: &'static str,
    pub cta_projects: &'static str,
    pub cta_skills: &'static str,
}

pub static HOME: Bilingual<HomeText> = Bilingual::new(
    HomeText {
        greeting: "Salut, je suis",
        description: "Étudiant passionné en infrastructure et cloud à Ynov Campus Toulouse (B2), explorant l'univers des réseaux, de l'infrastructure et des technologies cloud.",
        contact: "Me contacter",
        view_projects: "Voir mes projets",
        intro_title: "Bienvenue dans mon univers",
        intro_subtitle: "Un aperçu rapide de qui je suis et de ce que je fais",
        intro_cards: [
            ("Étudiant B2", "Infrastructure & Cloud - Ynov Toulouse"),
            ("SysAdmin", "Passionné par l'infrastructure"),
            ("Cloud Explorer", "Toujours curieux d'apprendre"),
        ],
        cta_title: "Prêt à explorer ?",
        cta_subtitle: "Découvrez mon parcours, mes projets infrastructure et mes compétences cloud",
        cta_about: "En savoir plus sur moi",
        cta_projects: "Mes projets",
        cta_skills: "Mes compétences",
    },
    HomeText {
        greeting: "Hi, I'm",
        description: "Passionate infrastructure and cloud student at Ynov Campus Toulouse (B2), exploring the universe of networking, infrastructure, and cloud technologies.",
        contact: "Get in Touch",
        view_projects: "View Projects",
        intro_title: "Welcome to my universe",
        intro_subtitle: "A quick glimpse of who I am and what I do",
        intro_cards: [
            ("B2 Student", "Infrastructure & Cloud - Ynov Toulouse"),
            ("SysAdmin", "Passionate about infrastructure"),
            ("Cloud Explorer", "Always curious to learn"),
        ],
        cta_title: "Ready to explore?",
        cta_subtitle: "Discover my journey, infrastructure projects, and cloud skills",
        cta_about: "Learn more about me",
        cta_projects: "My projects",
        cta_skills: "My skills",
    },
);
