//! Content of the landing page shown while the terminal is closed.
//!
//! The page is a fixed list of sections. [`page`] flattens them into
//! [`LandingLine`]s so a view only has to pick a style per [`LineKind`]
//! and scroll.

use crate::shell::content::{CONTACT, OWNER};

pub const TAGLINE: &str = "Full Stack Software Developer";
pub const KONAMI_HINT: &str = "Try the Konami code: ↑↑↓↓←→←→BA";

const HERO_TEXT: &str = "Crafting AI-powered platforms, decentralized systems, and \
intelligent interfaces that push the boundaries of modern technology.";

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub struct Experience {
    pub title: &'static str,
    pub organisation: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Readumé",
        description: "AI-powered resume parser and job matcher using advanced OCR and NLP. \
            Features intelligent document analysis, skill extraction, and automated job \
            matching with 92% F1 score accuracy.",
        tech: &["Tesseract OCR", "BERT", "Django", "Next.js", "LangChain", "PostgreSQL"],
        features: &[
            "Resume parsing with OCR technology",
            "ML-powered job matching (92% F1 score)",
            "LangChain chatbot integration",
            "Real-time skill extraction",
            "Automated application tracking",
        ],
    },
    Project {
        title: "AcreVault",
        description: "Blockchain-based land registry system using Ethereum smart contracts. \
            Implements GIS mapping integration and ML fraud detection with 92% precision \
            for secure property transactions.",
        tech: &["Solidity", "Ethereum", "React", "Web3.js", "GIS Mapping", "Python ML"],
        features: &[
            "Smart contract land registry",
            "GIS mapping integration",
            "Fraud detection (92% precision)",
            "Immutable transaction history",
            "Multi-signature verification",
        ],
    },
    Project {
        title: "Waste Food Management",
        description: "Award-winning hackathon solution for surplus food distribution. \
            Features predictive analytics, Ethereum logging, and Power BI dashboards. \
            Achieved 500+ successful donations and 65% repeat engagement.",
        tech: &["React", "Node.js", "Ethereum", "Power BI", "TensorFlow", "MongoDB"],
        features: &[
            "Surplus food tracking system",
            "Predictive demand forecasting",
            "Blockchain donation logging",
            "Real-time analytics dashboards",
            "Mobile-responsive interface",
        ],
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Freelance Developer",
        organisation: "Sales & Inventory Management System",
        period: "2023 - Present",
        description: "Built comprehensive full-stack web application for retail businesses \
            with advanced inventory tracking, analytics, and sales reporting capabilities.",
        achievements: &[
            "Developed complete CRUD operations for product management",
            "Implemented role-based user authentication system",
            "Created real-time inventory updates and notifications",
            "Built interactive dashboards with data visualization",
            "Integrated payment processing and order management",
        ],
        tech: &["React", "Node.js", "PostgreSQL", "JWT", "Chart.js"],
    },
    Experience {
        title: "Hackathon Winner",
        organisation: "VES-HACK-IT Competition",
        period: "2023",
        description: "Led team to victory with innovative Waste Food Inventory System, \
            addressing food waste through technology and achieving significant social impact.",
        achievements: &[
            "Matched 500+ food donations successfully",
            "Achieved 65% repeat user engagement rate",
            "Implemented predictive analytics for demand forecasting",
            "Created Ethereum-based transaction logging",
            "Developed comprehensive Power BI dashboards",
        ],
        tech: &["React", "Ethereum", "TensorFlow", "Power BI", "Node.js"],
    },
    Experience {
        title: "Full Stack Developer",
        organisation: "Personal Projects & Learning",
        period: "2022 - Present",
        description: "Continuous learning and development through challenging personal \
            projects, open-source contributions, and technology exploration.",
        achievements: &[
            "Built 10+ full-stack applications from concept to deployment",
            "Contributed to open-source projects on GitHub",
            "Mastered modern frameworks and development tools",
            "Implemented CI/CD pipelines and DevOps practices",
            "Explored emerging technologies like Web3 and AI/ML",
        ],
        tech: &["React", "Next.js", "Django", "Docker", "AWS"],
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        skills: &[
            "React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion", "GSAP",
            "JavaScript", "HTML5",
        ],
    },
    SkillGroup {
        title: "Backend Development",
        skills: &[
            "Node.js", "Django", "Express.js", "PostgreSQL", "MongoDB", "Redis", "Python",
            "REST APIs",
        ],
    },
    SkillGroup {
        title: "AI/ML & Blockchain",
        skills: &[
            "TensorFlow", "BERT/NLP", "LangChain", "Solidity", "Web3.js", "Ethereum",
            "scikit-learn", "OpenAI",
        ],
    },
    SkillGroup {
        title: "DevOps & Tools",
        skills: &[
            "Docker", "AWS", "GitHub Actions", "Postman", "VS Code", "Git", "Power BI", "Linux",
        ],
    },
];

const CONTACT_INTRO: &str = "Ready to bring your next project to life? Let's discuss how we \
can work together to create something amazing with cutting-edge technology.";

const CALL_TO_ACTION: &[&str] = &[
    "Ready to Start Your Project?",
    "Whether it's a web application, mobile app, or blockchain solution, I'm here to help \
     bring your vision to reality.",
];

/// How a line should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Owner name at the very top
    Banner,
    /// Section heading
    Heading,
    /// Project or role title
    Title,
    Body,
    /// Dates, tech stacks and other secondary details
    Detail,
    Bullet,
    Hint,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingLine {
    pub kind: LineKind,
    pub text: String,
}

impl LandingLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Section headings in display order.
pub const SECTIONS: &[&str] = &[
    "Featured Projects",
    "Experience",
    "Skills & Expertise",
    "Let's Connect",
];

/// The whole page, top to bottom.
pub fn page() -> Vec<LandingLine> {
    let mut lines = vec![
        LandingLine::new(LineKind::Banner, OWNER),
        LandingLine::new(LineKind::Title, TAGLINE),
        LandingLine::new(LineKind::Body, HERO_TEXT),
        LandingLine::blank(),
        LandingLine::new(LineKind::Hint, KONAMI_HINT),
        LandingLine::blank(),
    ];

    heading(&mut lines, SECTIONS[0]);
    for project in PROJECTS {
        lines.push(LandingLine::new(LineKind::Title, project.title));
        lines.push(LandingLine::new(LineKind::Body, project.description));
        bullets(&mut lines, project.features);
        lines.push(LandingLine::new(
            LineKind::Detail,
            format!("Tech: {}", project.tech.join(", ")),
        ));
        lines.push(LandingLine::blank());
    }

    heading(&mut lines, SECTIONS[1]);
    for role in EXPERIENCE {
        lines.push(LandingLine::new(LineKind::Title, role.title));
        lines.push(LandingLine::new(
            LineKind::Detail,
            format!("{} | {}", role.organisation, role.period),
        ));
        lines.push(LandingLine::new(LineKind::Body, role.description));
        bullets(&mut lines, role.achievements);
        lines.push(LandingLine::new(
            LineKind::Detail,
            format!("Tech: {}", role.tech.join(", ")),
        ));
        lines.push(LandingLine::blank());
    }

    heading(&mut lines, SECTIONS[2]);
    for group in SKILL_GROUPS {
        lines.push(LandingLine::new(LineKind::Title, group.title));
        lines.push(LandingLine::new(LineKind::Body, group.skills.join(" • ")));
    }
    lines.push(LandingLine::blank());

    heading(&mut lines, SECTIONS[3]);
    lines.push(LandingLine::new(LineKind::Body, CONTACT_INTRO));
    lines.push(LandingLine::blank());
    // Skip the "Contact Information:" header and its spacer
    for entry in CONTACT.iter().skip(2).filter(|line| !line.is_empty()) {
        lines.push(LandingLine::new(LineKind::Detail, *entry));
    }
    lines.push(LandingLine::blank());
    lines.push(LandingLine::new(LineKind::Title, CALL_TO_ACTION[0]));
    lines.push(LandingLine::new(LineKind::Body, CALL_TO_ACTION[1]));
    lines.push(LandingLine::blank());

    lines.push(LandingLine::new(
        LineKind::Detail,
        format!("© {OWNER}. Made with ♥ and code"),
    ));
    lines.push(LandingLine::new(LineKind::Hint, KONAMI_HINT));
    lines.push(LandingLine::new(
        LineKind::Hint,
        "Unlock terminal mode for interactive project exploration",
    ));
    lines
}

fn heading(lines: &mut Vec<LandingLine>, title: &str) {
    lines.push(LandingLine::new(LineKind::Heading, title));
    lines.push(LandingLine::blank());
}

fn bullets(lines: &mut Vec<LandingLine>, items: &[&str]) {
    lines.extend(
        items
            .iter()
            .map(|item| LandingLine::new(LineKind::Bullet, format!("• {item}"))),
    );
}
