//! Page content: the person, their links and their projects

use serde::Deserialize;

/// External link shown next to the Email button
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Card in the projects grid
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    /// Placeholder cards for a fresh config
    pub fn samples() -> Vec<Self> {
        let card = |title: &str, description: &str, tags: &[&str]| Self {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            url: None,
        };

        vec![
            card(
                "Ledger API",
                "Double-entry bookkeeping service with idempotent transfers.",
                &["Java", "PostgreSQL"],
            ),
            card(
                "Link Shortener",
                "Tiny redirect service with per-link hit counters.",
                &["Python", "Redis"],
            ),
            card(
                "Chat Relay",
                "WebSocket fan-out server for small rooms.",
                &["Node.js", "WebSocket"],
            ),
        ]
    }
}

/// Who the page is about
#[derive(Debug, Clone)]
pub struct Profile {
    /// Small line above the name
    pub greeting: String,
    pub name: String,
    pub role: String,
    pub tagline: String,
    /// Short status lines under the tagline
    pub status: Vec<String>,
    /// The address both contact widgets disclose and copy
    pub email: String,
    /// About section paragraphs
    pub about: Vec<String>,
    pub links: Vec<Link>,
    /// Footer "Built with ..." text
    pub built_with: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            greeting: "Hey there!, I'm-".to_string(),
            name: "Ada Rivera.".to_string(),
            role: "Back-end Software Engineer.".to_string(),
            tagline: "Building efficient and secure back-end solutions.".to_string(),
            status: vec![
                "🚀 Exploring opportunities and side projects.".to_string(),
                "💻 Currently building personal projects.".to_string(),
            ],
            email: "hello@example.com".to_string(),
            about: vec![
                "I'm a back-end developer who enjoys designing APIs and the systems behind them."
                    .to_string(),
                "I've worked with Python and JavaScript and I'm currently digging into Java."
                    .to_string(),
                "Always learning new technologies to become a more complete developer.".to_string(),
            ],
            links: vec![
                Link::new("Github", "https://github.com/"),
                Link::new("Linkedin", "https://www.linkedin.com/"),
            ],
            built_with: "Rust".to_string(),
        }
    }
}

/// Profile as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileProfile {
    pub greeting: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub tagline: Option<String>,
    pub status: Option<Vec<String>>,
    pub email: Option<String>,
    pub about: Option<Vec<String>>,
    pub links: Option<Vec<Link>>,
    pub built_with: Option<String>,
}

impl Profile {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileProfile>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            greeting: file.greeting.unwrap_or(defaults.greeting),
            name: file.name.unwrap_or(defaults.name),
            role: file.role.unwrap_or(defaults.role),
            tagline: file.tagline.unwrap_or(defaults.tagline),
            status: file.status.unwrap_or(defaults.status),
            // An empty address would make the copy button meaningless
            email: file
                .email
                .filter(|e| !e.trim().is_empty())
                .unwrap_or(defaults.email),
            about: file.about.unwrap_or(defaults.about),
            links: file.links.unwrap_or(defaults.links),
            built_with: file.built_with.unwrap_or(defaults.built_with),
        }
    }
}
