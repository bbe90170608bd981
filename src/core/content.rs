//! Static portfolio content: skills, projects and contact methods.
//!
//! Personal details come from the `[profile]` config section; everything
//! here is the fixed catalogue shown around them.

use crate::core::config::ResolvedProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Web,
    App,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub kind: ProjectKind,
    pub status: ProjectStatus,
    pub repo_url: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub value: String,
    pub link: String,
    pub description: &'static str,
}

fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Frontend Development",
            skills: vec![
                skill("React", 85),
                skill("HTML5", 90),
                skill("CSS3", 85),
                skill("JavaScript", 80),
                skill("Responsive Design", 85),
            ],
        },
        SkillCategory {
            title: "Design & Tools",
            skills: vec![skill("Figma", 75), skill("Photoshop", 70), skill("UI/UX Design", 75)],
        },
        SkillCategory {
            title: "Development Tools",
            skills: vec![skill("Git/GitHub", 80), skill("VS Code", 90), skill("SQL Server", 65)],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-Commerce App",
            description: "Mobile shop with product management and integrated payments.",
            technologies: vec!["Flutter", "Node.js", "SQLite", "Stripe"],
            kind: ProjectKind::App,
            status: ProjectStatus::Completed,
            repo_url: Some("https://github.com/qtuan0343/flutter-ecommerce-app"),
        },
        Project {
            id: 2,
            title: "Portfolio",
            description: "This portfolio: static pages plus live demos of public APIs.",
            technologies: vec!["Rust", "ratatui", "tokio"],
            kind: ProjectKind::Web,
            status: ProjectStatus::InProgress,
            repo_url: None,
        },
        Project {
            id: 3,
            title: "Language Center Manager",
            description: "Course, class and student management for an English language center.",
            technologies: vec!["Figma", "React", ".NET Core", "SQL Server"],
            kind: ProjectKind::Web,
            status: ProjectStatus::Completed,
            repo_url: None,
        },
    ]
}

pub fn contact_methods(profile: &ResolvedProfile, github_username: &str) -> Vec<ContactMethod> {
    let mut methods = vec![
        ContactMethod {
            title: "Email",
            value: profile.email.clone(),
            link: format!("mailto:{}", profile.email),
            description: "Write to me directly",
        },
        ContactMethod {
            title: "GitHub",
            value: github_username.to_string(),
            link: format!("https://github.com/{github_username}"),
            description: "Browse my projects",
        },
    ];
    if let Some(phone) = &profile.phone {
        methods.push(ContactMethod {
            title: "Phone",
            value: phone.clone(),
            link: format!("tel:{}", phone.replace(' ', "")),
            description: "Call or message me",
        });
    }
    methods
}
