pub mod portfolio;

pub use portfolio::{
    group_skills_by_category, BlogPost, Education, Experience, PortfolioContent, Profile, Project,
    Skill, SkillCategory,
};
