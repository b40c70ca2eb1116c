use serde::{Deserialize, Serialize};

/// The whole portfolio document served by the API. Loaded once at startup and
/// shared read-only across handlers; insertion order of every list is
/// meaningful (it decides which items land on which page).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub blogs: Vec<BlogPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub github: String,
    pub resume_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Comma-separated, as authored. Use [`Project::tech_stack_list`] for the
    /// badge-ready form.
    pub tech_stack: String,
    pub image: String,
    pub github: String,
    pub live: String,
}

impl Project {
    /// Splits the comma-separated stack into trimmed badge entries.
    pub fn tech_stack_list(&self) -> Vec<&str> {
        self.tech_stack
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub minutes_read: u32,
    pub link: String,
}

/// One named skill category with its members, in order of first appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// Groups skills by category, preserving both the category order and the
/// skill order within each category.
pub fn group_skills_by_category(skills: &[Skill]) -> Vec<SkillCategory> {
    let mut grouped: Vec<SkillCategory> = Vec::new();
    for skill in skills {
        match grouped.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill.name.clone()),
            None => grouped.push(SkillCategory {
                category: skill.category.clone(),
                skills: vec![skill.name.clone()],
            }),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_tech_stack_list_trims_and_drops_empties() {
        let project = Project {
            id: 0,
            title: "x".to_string(),
            description: String::new(),
            tech_stack: "Rust, Tokio, , Axum ".to_string(),
            image: String::new(),
            github: String::new(),
            live: String::new(),
        };
        assert_eq!(project.tech_stack_list(), vec!["Rust", "Tokio", "Axum"]);
    }

    #[test]
    fn test_grouping_preserves_first_appearance_order() {
        let skills = vec![
            make_skill("TypeScript", "Languages"),
            make_skill("React", "Frameworks"),
            make_skill("Rust", "Languages"),
        ];
        let grouped = group_skills_by_category(&skills);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].category, "Languages");
        assert_eq!(grouped[0].skills, vec!["TypeScript", "Rust"]);
        assert_eq!(grouped[1].skills, vec!["React"]);
    }

    #[test]
    fn test_grouping_empty_input() {
        assert!(group_skills_by_category(&[]).is_empty());
    }
}
