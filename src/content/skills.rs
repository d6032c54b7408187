//! Skills page text

use crate::domain::{SkillArea, SkillLevel};
use crate::i18n::Bilingual;

#[derive(Debug)]
pub struct SkillsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub legend: &'static str,
    /// Headings in `SkillArea` declaration order
    areas: [&'static str; 6],
    /// Labels in `SkillLevel` order
    levels: [&'static str; 4],
}

impl SkillsText {
    pub fn area(&self, area: SkillArea) -> &'static str {
        self.areas[area as usize]
    }

    pub fn level(&self, level: SkillLevel) -> &'static str {
        self.levels[level as usize]
    }
}

pub static SKILLS: Bilingual<SkillsText> = Bilingual::new(
    SkillsText {
        title: "Mes Compétences",
        subtitle: "Un aperçu de mes compétences techniques en infrastructure, réseau et cloud.",
        legend: "Légende des niveaux",
        areas: [
            "Infrastructure",
            "Cloud Computing",
            "Réseaux",
            "Sécurité",
            "Programmation",
            "Bases de données",
        ],
        levels: ["Débutant", "Intermédiaire", "Avancé", "Expert"],
    },
    SkillsText {
        title: "My Skills",
        subtitle: "An overview of my technical skills in infrastructure, networking, and cloud.",
        legend: "Skill Levels",
        areas: [
            "Infrastructure",
            "Cloud Computing",
            "Networking",
            "Security",
            "Programming",
            "Databases",
        ],
        levels: ["Beginner", "Intermediate", "Advanced", "Expert"],
    },
);
