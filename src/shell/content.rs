//! Pre-authored terminal content.
//!
//! Every line the interpreter can print lives here. Nothing is computed.

/// Name shown in the banner and in the home-goal message.
pub const OWNER: &str = "Rushist";

/// Banner logo, printed as a single multi-line transcript entry.
pub const LOGO: &str = r"
    ██████╗ ██╗   ██╗███████╗██╗  ██╗██╗███████╗████████╗
    ██╔══██╗██║   ██║██╔════╝██║  ██║██║██╔════╝╚══██╔══╝
    ██████╔╝██║   ██║███████╗███████║██║███████╗   ██║
    ██╔══██╗██║   ██║╚════██║██╔══██║██║╚════██║   ██║
    ██║  ██║╚██████╔╝███████║██║  ██║██║███████║   ██║
    ╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝╚═╝╚══════╝   ╚═╝
";

/// Lines printed when the terminal opens.
pub fn welcome_lines() -> Vec<String> {
    vec![
        LOGO.to_string(),
        format!("Welcome to {}'s Portfolio Terminal v2.0.1", OWNER),
        "Type \"help\" for available commands.".to_string(),
        String::new(),
    ]
}

pub const HELP: &[&str] = &[
    "Available commands:",
    "  help          - Show this help message",
    "  ls            - List available projects",
    "  cat <project> - Display project details",
    "  skills        - Show technical skills",
    "  contact       - Display contact information",
    "  whoami        - About the developer",
    "  clear         - Clear terminal",
    "  exit          - Exit terminal mode",
    "",
    "Projects: readume, acrevault, wastefood",
];

pub const LS: &[&str] = &[
    "total 3",
    "drwxr-xr-x  2 rushist  staff   64 Dec 2024 readume/",
    "drwxr-xr-x  2 rushist  staff   64 Dec 2024 acrevault/",
    "drwxr-xr-x  2 rushist  staff   64 Dec 2024 wastefood/",
    "-rw-r--r--  1 rushist  staff  1.2K Dec 2024 skills.txt",
    "-rw-r--r--  1 rushist  staff  512 Dec 2024 contact.txt",
];

pub const WHOAMI: &[&str] = &[
    "Rushist - Full Stack Software Developer",
    "",
    "Specializing in:",
    "• AI-powered applications",
    "• Blockchain solutions",
    "• Full-stack web development",
    "• Machine learning integration",
    "",
    "Currently crafting the future, one line of code at a time.",
];

pub const SKILLS: &[&str] = &[
    "Technical Skills Matrix:",
    "",
    "┌─────────────────┬──────────────────┬────────────────────┐",
    "│ Frontend        │ Backend          │ AI/ML & Blockchain │",
    "├─────────────────┼──────────────────┼────────────────────┤",
    "│ React           │ Node.js          │ TensorFlow         │",
    "│ Next.js         │ Django           │ BERT/NLP           │",
    "│ TypeScript      │ Express.js       │ LangChain          │",
    "│ Tailwind        │ PostgreSQL       │ Solidity           │",
    "│ GSAP            │ MongoDB          │ Web3.js            │",
    "└─────────────────┴──────────────────┴────────────────────┘",
];

pub const CONTACT: &[&str] = &[
    "Contact Information:",
    "",
    "Email: rushabh9372@gmail.com",
    "Phone: +91 91584 97458",
    "LinkedIn: linkedin.com/in/rushist",
    "LeetCode: leetcode.com/u/rushist",
    "Resume: Available for download",
    "",
    "Location: Mumbai, Maharashtra",
];

/// Project documents readable with `cat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Readume,
    Acrevault,
    Wastefood,
}

impl Document {
    /// All documents in listing order.
    pub const ALL: [Document; 3] = [Document::Readume, Document::Acrevault, Document::Wastefood];

    /// Look up a document by its (already lower-cased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "readume" => Some(Document::Readume),
            "acrevault" => Some(Document::Acrevault),
            "wastefood" => Some(Document::Wastefood),
            _ => None,
        }
    }

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Document::Readume => "readume",
            Document::Acrevault => "acrevault",
            Document::Wastefood => "wastefood",
        }
    }

    /// Output lines: the art block as one entry, then the write-up.
    pub fn lines(self) -> Vec<String> {
        let (art, body) = match self {
            Document::Readume => (READUME_ART, READUME),
            Document::Acrevault => (ACREVAULT_ART, ACREVAULT),
            Document::Wastefood => (WASTEFOOD_ART, WASTEFOOD),
        };
        std::iter::once(art)
            .chain(body.iter().copied())
            .map(str::to_string)
            .collect()
    }
}

const READUME_ART: &str = r"
    ┌─────────────────────────────────────────┐
    │  READUMÉ - AI Resume Parser             │
    │  ┌───────────────────────────────────┐  │
    │  │ [OCR] → [NLP] → [ML] → [MATCH]    │  │
    │  │                                   │  │
    │  │ ▓▓▓▓▓▓▓▓▓▓ 92% F1 Score           │  │
    │  │ ▓▓▓▓▓▓▓▓▓▓ BERT Integration       │  │
    │  │ ▓▓▓▓▓▓▓▓▓▓ LangChain Chatbot      │  │
    │  └───────────────────────────────────┘  │
    └─────────────────────────────────────────┘
";

const READUME: &[&str] = &[
    "READUMÉ - AI-Powered Resume Parser & Job Matcher",
    "",
    "Description:",
    "Advanced resume parsing system using OCR and NLP technologies",
    "to extract skills and match candidates with relevant job opportunities.",
    "",
    "Key Features:",
    "• Tesseract OCR for document processing",
    "• BERT model for semantic understanding (92% F1 score)",
    "• LangChain chatbot integration",
    "• Real-time skill extraction and analysis",
    "• Automated job matching algorithm",
    "",
    "Tech Stack: Django, Next.js, TensorFlow, PostgreSQL, LangChain",
];

const ACREVAULT_ART: &str = r"
    ┌─────────────────────────────────────────┐
    │  ACREVAULT - Blockchain Land Registry   │
    │  ┌───────────────────────────────────┐  │
    │  │ [ETH] ←→ [GIS] ←→ [SMART CONTRACT]│  │
    │  │                                   │  │
    │  │ Immutable Records                 │  │
    │  │ GIS Mapping                       │  │
    │  │ 92% Fraud Detection               │  │
    │  └───────────────────────────────────┘  │
    └─────────────────────────────────────────┘
";

const ACREVAULT: &[&str] = &[
    "ACREVAULT - Blockchain Land Registry System",
    "",
    "Description:",
    "Decentralized land registry platform using Ethereum smart contracts",
    "with integrated GIS mapping and ML-powered fraud detection.",
    "",
    "Key Features:",
    "• Ethereum smart contracts for immutable records",
    "• GIS mapping integration for property visualization",
    "• Machine learning fraud detection (92% precision)",
    "• Multi-signature verification system",
    "• Transparent transaction history",
    "",
    "Tech Stack: Solidity, React, Web3.js, GIS APIs, Python ML",
];

const WASTEFOOD_ART: &str = r"
    ┌─────────────────────────────────────────┐
    │  WASTE FOOD MANAGEMENT - Winner         │
    │  ┌───────────────────────────────────┐  │
    │  │ [PREDICT] → [MATCH] → [DISTRIBUTE]│  │
    │  │                                   │  │
    │  │ 500+ Donations Matched            │  │
    │  │ 65% Repeat Engagement             │  │
    │  │ Real-time Analytics               │  │
    │  └───────────────────────────────────┘  │
    └─────────────────────────────────────────┘
";

const WASTEFOOD: &[&str] = &[
    "WASTE FOOD MANAGEMENT - Hackathon Winner",
    "",
    "Description:",
    "Award-winning solution for surplus food distribution with predictive",
    "analytics and blockchain logging. Winner of VES-HACK-IT competition.",
    "",
    "Key Achievements:",
    "• 500+ successful food donations matched",
    "• 65% repeat user engagement rate",
    "• Real-time demand forecasting",
    "• Ethereum-based transaction logging",
    "• Comprehensive Power BI dashboards",
    "",
    "Tech Stack: React, Node.js, Ethereum, TensorFlow, Power BI, MongoDB",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_ends_with_project_list() {
        assert_eq!(
            HELP.last().copied(),
            Some("Projects: readume, acrevault, wastefood")
        );
    }

    #[test]
    fn help_mentions_every_listed_command() {
        for cmd in ["help", "ls", "cat", "skills", "contact", "whoami", "clear", "exit"] {
            assert!(
                HELP.iter().any(|l| l.trim_start().starts_with(cmd)),
                "help is missing {}",
                cmd
            );
        }
    }

    #[test]
    fn document_names_round_trip() {
        for doc in Document::ALL {
            assert_eq!(Document::from_name(doc.name()), Some(doc));
        }
        assert_eq!(Document::from_name("resume"), None);
    }

    #[test]
    fn document_title_is_second_line() {
        let lines = Document::Readume.lines();
        assert!(lines[0].contains('┌'));
        assert_eq!(lines[1], "READUMÉ - AI-Powered Resume Parser & Job Matcher");
        assert!(lines.last().is_some_and(|l| l.starts_with("Tech Stack:")));
    }

    #[test]
    fn welcome_starts_with_logo() {
        let lines = welcome_lines();
        assert_eq!(lines[0], LOGO);
        assert!(lines[1].contains("Portfolio Terminal"));
        assert_eq!(lines.len(), 4);
    }
}
