//! Static keyword lists used by the extractors.
//!
//! Declaration order matters: skills are reported in `SKILL_VOCABULARY`
//! order regardless of where they occur in the text.

/// Known skill tokens, matched case-insensitively as substrings
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "SQL",
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Machine Learning",
    "Deep Learning",
    "AI",
    "Data Science",
    "Analytics",
    "Git",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Teamwork",
];

/// Degree and institution markers (lowercase)
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "diploma",
    "degree",
    "university",
    "college",
    "b.tech",
    "m.tech",
    "bsc",
    "msc",
    "be",
    "me",
];

/// Terms that disqualify a capitalized run from being a personal name.
/// Matched case-insensitively against the whole candidate span.
pub const NAME_EXCLUSIONS: &[&str] = &[
    "University",
    "College",
    "School",
    "Academy",
    "Department",
    "Institute",
    "Project",
    "Simulation",
    "Challenge",
    "Technologies",
    "Development",
    "About",
    "Skills",
    "Education",
    "Experience",
    "Achievements",
    "Publications",
    "Certifications",
    "Participation",
    "Awards",
    "Blood Group",
    "Based Blood",
    "Brain Tumor",
    "License Plate",
    "Fingerprint Based",
    "Vision Transformers",
    "Smart Mobility",
    "Based Classification",
    "Space Apps",
    "Innovation Challenge",
    "Junior College",
    "Sales Academy",
    "User Segmentation",
];

/// Mail providers recognised when a decoder dropped the "@"
pub const EMAIL_PROVIDERS: &[&str] = &["gmail", "yahoo", "outlook", "hotmail", "email", "icloud"];
