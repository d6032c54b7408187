//! Education page text and programme data

use crate::i18n::Bilingual;

#[derive(Debug)]
pub struct Programme {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub status: &'static str,
    pub subjects: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

#[derive(Debug)]
pub struct Certification {
    pub name: &'static str,
    pub status: &'static str,
    pub date: &'static str,
}

#[derive(Debug)]
pub struct EducationText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub current_badge: &'static str,
    pub key_subjects: &'static str,
    pub achievements: &'static str,
    pub projects: &'static str,
    pub current_education: &'static str,
    pub previous_education: &'static str,
    pub certifications_title: &'static str,
    pub current: Programme,
    pub previous: Programme,
    pub certifications: &'static [Certification],
}

pub static EDUCATION: Bilingual<EducationText> = Bilingual::new(
    EducationText {
        title: "Ma Formation",
        subtitle: "Mon parcours éducatif en infrastructure, réseau et technologies cloud.",
        current_badge: "Actuel",
        key_subjects: "Matières principales",
        achievements: "Réalisations",
        projects: "Projets notables",
        current_education: "Formation actuelle",
        previous_education: "Formation précédente",
        certifications_title: "Certifications",
        current: Programme {
            degree: "Bachelor Informatique - Infrastructure & Cloud",
            school: "Ynov Campus Toulouse",
            period: "2023 - 2025",
            status: "B2 - En cours",
            subjects: &[
                "Administration Système Linux",
                "Virtualisation VMware",
                "Cloud Computing AWS",
                "Réseaux Cisco",
                "Sécurité Informatique",
                "DevOps & Automation",
                "Monitoring & Supervision",
                "Architecture Cloud",
            ],
            projects: &[
                "Infrastructure AWS avec Terraform",
                "Réseau d'entreprise avec VLANs",
                "Pipeline CI/CD GitLab",
                "Monitoring Prometheus/Grafana",
            ],
            achievements: &[
                "Projet infrastructure noté 18/20",
                "Participation aux concours de cybersécurité",
                "Certification AWS en préparation",
            ],
        },
        previous: Programme {
            degree: "Baccalauréat Scientifique",
            school: "Lycée Pierre-Paul Riquet",
            period: "2020 - 2023",
            status: "Obtenu avec mention",
            subjects: &[
                "Mathématiques",
                "Physique-Chimie",
                "Sciences de l'Ingénieur",
                "Informatique",
            ],
            projects: &[],
            achievements: &[
                "Mention Bien",
                "Spécialité Sciences de l'Ingénieur",
                "Projet technique récompensé",
            ],
        },
        certifications: &[
            Certification { name: "AWS Cloud Practitioner", status: "En préparation", date: "2024" },
            Certification { name: "Cisco CCNA", status: "En préparation", date: "2024" },
            Certification { name: "CompTIA Network+", status: "Prévu", date: "2025" },
        ],
    },
    EducationText {
        title: "My Education",
        subtitle: "My educational journey in infrastructure, networking, and cloud technologies.",
        current_badge: "Current",
        key_subjects: "Key Subjects",
        achievements: "Achievements",
        projects: "Notable Projects",
        current_education: "Current Education",
        previous_education: "Previous Education",
        certifications_title: "Certifications",
        current: Programme {
            degree: "Bachelor Computer Science - Infrastructure & Cloud",
            school: "Ynov Campus Toulouse",
            period: "2023 - 2025",
            status: "B2 - In Progress",
            subjects: &[
                "Linux System Administration",
                "VMware Virtualization",
                "AWS Cloud Computing",
                "Cisco Networking",
                "IT Security",
                "DevOps & Automation",
                "Monitoring & Supervision",
                "Cloud Architecture",
            ],
            projects: &[
                "AWS Infrastructure with Terraform",
                "Enterprise Network with VLANs",
                "GitLab CI/CD Pipeline",
                "Prometheus/Grafana Monitoring",
            ],
            achievements: &[
                "Infrastructure project graded 18/20",
                "Participation in cybersecurity competitions",
                "AWS certification in preparation",
            ],
        },
        previous: Programme {
            degree: "Scientific Baccalaureate",
            school: "Pierre-Paul Riquet High School",
            period: "2020 - 2023",
            status: "Obtained with honors",
            subjects: &[
                "Mathematics",
                "Physics-Chemistry",
                "Engineering Sciences",
                "Computer Science",
            ],
            projects: &[],
            achievements: &[
                "Good Honors",
                "Engineering Sciences Specialty",
                "Awarded technical project",
            ],
        },
        certifications: &[
            Certification { name: "AWS Cloud Practitioner", status: "In Progress", date: "2024" },
            Certification { name: "Cisco CCNA", status: "In Progress", date: "2024" },
            Certification { name: "CompTIA Network+", status: "Planned", date: "2025" },
        ],
    },
);
