//! Skill-Gap Recommendations
//!
//! Compares extracted skills against the requirements of a career domain and
//! suggests courses for the gap.

use serde::{Deserialize, Serialize};

/// A career domain with its required skills and suggested courses
#[derive(Debug, Clone, Copy)]
pub struct CareerDomain {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub courses: &'static [&'static str],
}

pub const CAREER_DOMAINS: &[CareerDomain] = &[
    CareerDomain {
        name: "Web Development",
        required: &["Html", "Css", "Javascript", "React", "Node", "Express", "Mongodb"],
        courses: &[
            "Full Stack Web Development - Udemy",
            "React Complete Guide - Coursera",
            "Node.js Masterclass - Udacity",
        ],
    },
    CareerDomain {
        name: "Data Science",
        required: &["Python", "Pandas", "Numpy", "Sklearn", "Machine Learning", "Data Science", "Sql"],
        courses: &[
            "Data Science Bootcamp - Coursera",
            "Machine Learning A-Z - Udemy",
            "Python for Data Science - edX",
        ],
    },
    CareerDomain {
        name: "Mobile Development",
        required: &["Java", "React", "Javascript", "Mobile", "Android", "Ios"],
        courses: &[
            "React Native Complete Course - Udemy",
            "Android Development - Coursera",
            "iOS Development - Udacity",
        ],
    },
    CareerDomain {
        name: "AI/ML",
        required: &[
            "Python",
            "Machine Learning",
            "Deep Learning",
            "Tensorflow",
            "Pytorch",
            "Ai",
            "Numpy",
            "Pandas",
        ],
        courses: &[
            "Deep Learning Specialization - Coursera",
            "AI & ML Masterclass - Udemy",
            "TensorFlow Developer - Coursera",
        ],
    },
    CareerDomain {
        name: "DevOps",
        required: &["Docker", "Kubernetes", "Aws", "Git", "Python", "Linux"],
        courses: &[
            "DevOps Fundamentals - Udemy",
            "AWS Certified Solutions - Coursera",
            "Docker & Kubernetes - Udacity",
        ],
    },
];

/// Result of comparing a candidate's skills with a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub domain: String,
    pub required: Vec<String>,
    pub missing: Vec<String>,
    pub courses: Vec<String>,
}

/// Domain lookup, ignoring case
pub fn find_domain(name: &str) -> Option<&'static CareerDomain> {
    CAREER_DOMAINS.iter().find(|d| d.name.eq_ignore_ascii_case(name.trim()))
}

pub fn domain_names() -> Vec<&'static str> {
    CAREER_DOMAINS.iter().map(|d| d.name).collect()
}

/// Target skills absent from `user_skills` (exact comparison, target order)
pub fn missing_skills(user_skills: &[String], target_skills: &[String]) -> Vec<String> {
    target_skills
        .iter()
        .filter(|skill| !user_skills.contains(*skill))
        .cloned()
        .collect()
}

/// Case-insensitive gap between `user_skills` and the requirements of `domain`.
///
/// Returns `None` if the domain is unknown.
pub fn analyze_skill_gap(user_skills: &[String], domain: &str) -> Option<SkillGapAnalysis> {
    let domain = find_domain(domain)?;
    let normalized: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let missing = domain
        .required
        .iter()
        .filter(|skill| !normalized.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    Some(SkillGapAnalysis {
        domain: domain.name.to_string(),
        required: domain.required.iter().map(|s| s.to_string()).collect(),
        missing,
        courses: domain.courses.iter().map(|s| s.to_string()).collect(),
    })
}
