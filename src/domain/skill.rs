//! Skill - Technical Skills and Proficiency Levels

/// Proficiency level, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    /// Highest star count any level reaches
    pub const MAX_STARS: usize = 4;

    /// Filled stars shown for this level (1..=4)
    pub fn stars(self) -> usize {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }
}

/// Skill group, used to pick the translated heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillArea {
    Infrastructure,
    Cloud,
    Networking,
    Security,
    Programming,
    Databases,
}

/// A named skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

const fn skill(name: &'static str, level: SkillLevel) -> Skill {
    Skill { name, level }
}

/// Skills grouped by area, in display order
pub static SKILL_GROUPS: [(SkillArea, &[Skill]); 6] = [
    (
        SkillArea::Infrastructure,
        &[
            skill("Linux", SkillLevel::Expert),
            skill("VMware vSphere", SkillLevel::Advanced),
            skill("Docker", SkillLevel::Advanced),
            skill("Kubernetes", SkillLevel::Intermediate),
            skill("Ansible", SkillLevel::Advanced),
            skill("Terraform", SkillLevel::Intermediate),
        ],
    ),
    (
        SkillArea::Cloud,
        &[
            skill("AWS", SkillLevel::Advanced),
            skill("Azure", SkillLevel::Intermediate),
            skill("Google Cloud", SkillLevel::Beginner),
            skill("CloudFormation", SkillLevel::Intermediate),
            skill("Serverless", SkillLevel::Beginner),
        ],
    ),
    (
        SkillArea::Networking,
        &[
            skill("Cisco IOS", SkillLevel::Advanced),
            skill("VLAN", SkillLevel::Expert),
            skill("Routing & Switching", SkillLevel::Expert),
            skill("VPN", SkillLevel::Advanced),
            skill("Load Balancing", SkillLevel::Intermediate),
            skill("DNS/DHCP", SkillLevel::Expert),
        ],
    ),
    (
        SkillArea::Security,
        &[
            skill("Firewall", SkillLevel::Advanced),
            skill("SSL/TLS", SkillLevel::Advanced),
            skill("Network Security", SkillLevel::Advanced),
            skill("Monitoring", SkillLevel::Expert),
        ],
    ),
    (
        SkillArea::Programming,
        &[
            skill("Bash/Shell", SkillLevel::Expert),
            skill("Python", SkillLevel::Advanced),
            skill("PowerShell", SkillLevel::Intermediate),
            skill("YAML", SkillLevel::Expert),
            skill("JSON", SkillLevel::Expert),
        ],
    ),
    (
        SkillArea::Databases,
        &[
            skill("MySQL", SkillLevel::Advanced),
            skill("PostgreSQL", SkillLevel::Intermediate),
            skill("MongoDB", SkillLevel::Intermediate),
            skill("Redis", SkillLevel::Intermediate),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_grow_with_level() {
        let stars: Vec<usize> = SkillLevel::ALL.iter().map(|l| l.stars()).collect();
        assert_eq!(stars, vec![1, 2, 3, 4]);
        assert!(SkillLevel::Expert > SkillLevel::Beginner);
    }

    #[test]
    fn test_every_group_is_populated() {
        assert!(SKILL_GROUPS.iter().all(|(_, skills)| !skills.is_empty()));
    }
}
