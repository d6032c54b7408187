//! Project - Portfolio Project Catalog

use serde::{Deserialize, Serialize};

use crate::i18n::{Bilingual, Locale};

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    /// Coursework
    School,
    /// Side project
    Personal,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 2] = [ProjectCategory::School, ProjectCategory::Personal];

    /// Stable identifier (`"school"`, `"personal"`)
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::School => "school",
            ProjectCategory::Personal => "personal",
        }
    }
}

/// An immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: Bilingual<&'static str>,
    pub description: Bilingual<&'static str>,
    pub category: ProjectCategory,
    /// Technology tags, in display order
    pub technologies: &'static [&'static str],
    /// Source repository link
    pub source_url: &'static str,
    /// Live demo link (`"#"` when there is none yet)
    pub demo_url: &'static str,
}

impl ProjectRecord {
    /// Title in the given locale
    pub fn title(&self, locale: Locale) -> &'static str {
        *self.title.get(locale)
    }

    /// Description in the given locale
    pub fn description(&self, locale: Locale) -> &'static str {
        *self.description.get(locale)
    }

    /// Whether a live demo exists
    pub fn has_demo(&self) -> bool {
        !self.demo_url.is_empty() && self.demo_url != "#"
    }
}

const GITHUB_PROFILE: &str = "https://github.com/Coco-Bd";

/// The fixed project catalog, in display order
pub static CATALOG: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        title: Bilingual::new("Infrastructure Cloud AWS", "AWS Cloud Infrastructure"),
        description: Bilingual::new(
            "Déploiement d'une infrastructure complète sur AWS avec Terraform",
            "Complete infrastructure deployment on AWS with Terraform",
        ),
        category: ProjectCategory::School,
        technologies: &["AWS", "Terraform", "Docker", "Kubernetes"],
        source_url: GITHUB_PROFILE,
        demo_url: "#",
    },
    ProjectRecord {
        id: 2,
        title: Bilingual::new("Réseau d'Entreprise Simulé", "Simulated Enterprise Network"),
        description: Bilingual::new(
            "Configuration complète d'un réseau d'entreprise avec VLANs et sécurité",
            "Complete enterprise network configuration with VLANs and security",
        ),
        category: ProjectCategory::School,
        technologies: &["Cisco", "VLAN", "Routing", "Firewall"],
        source_url: GITHUB_PROFILE,
        demo_url: "#",
    },
    ProjectRecord {
        id: 3,
        title: Bilingual::new("Monitoring Infrastructure", "Infrastructure Monitoring"),
        description: Bilingual::new(
            "Système de monitoring complet avec Prometheus et Grafana",
            "Complete monitoring system with Prometheus and Grafana",
        ),
        category: ProjectCategory::Personal,
        technologies: &["Prometheus", "Grafana", "Docker", "Linux"],
        source_url: GITHUB_PROFILE,
        demo_url: "#",
    },
    ProjectRecord {
        id: 4,
        title: Bilingual::new("Serveur Web Haute Disponibilité", "High Availability Web Server"),
        description: Bilingual::new(
            "Architecture haute disponibilité avec load balancer et clustering",
            "High availability architecture with load balancer and clustering",
        ),
        category: ProjectCategory::School,
        technologies: &["Nginx", "HAProxy", "Linux", "Clustering"],
        source_url: GITHUB_PROFILE,
        demo_url: "#",
    },
    ProjectRecord {
        id: 5,
        title: Bilingual::new("Pipeline CI/CD", "CI/CD Pipeline"),
        description: Bilingual::new(
            "Pipeline automatisé de déploiement avec GitLab CI",
            "Automated deployment pipeline with GitLab CI",
        ),
        category: ProjectCategory::Personal,
        technologies: &["GitLab CI", "Docker", "Ansible", "Bash"],
        source_url: GITHUB_PROFILE,
        demo_url: "#",
    },
    ProjectRecord {
        id: 6,
        title: Bilingual::new("Virtualisation VMware", "VMware Virtualization"),
        description: Bilingual::new(
            "Infrastructure virtualisée complète avec VMware vSphere",
            "Complete virtualized infrastructure with VMware vSphere",
        ),
        category: ProjectCategory::School,
        technologies: &["VMware", "vSphere", "ESXi", "vCenter"],
        source_url: GITHUB_PROFILE,
        demo_url: "#",
    },
];
