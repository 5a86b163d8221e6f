//! Normalized catalog entity structs.
//!
//! Every type here is an immutable value object: records are constructed by
//! the seed loader and never mutated afterwards. Derived views (filtered,
//! sorted) hold references into the same records, never altered copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access tier label. Descriptive metadata only; nothing in this crate
/// enforces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Free,
    Paid,
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Access::Free => write!(f, "free"),
            Access::Paid => write!(f, "paid"),
        }
    }
}

/// Functional categories the agent directory is organized under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Frontend,
    Backend,
    Systems,
    Architecture,
    Data,
    DevOps,
    Security,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Frontend,
        Category::Backend,
        Category::Systems,
        Category::Architecture,
        Category::Data,
        Category::DevOps,
        Category::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Systems => "Systems",
            Category::Architecture => "Architecture",
            Category::Data => "Data",
            Category::DevOps => "DevOps",
            Category::Security => "Security",
        }
    }

    /// Parse a category label case-insensitively.
    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single callable interface exposed by an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    /// Short API label, e.g. "POST /generate/ui".
    pub api: String,
}

/// A curated agent template entry (the primary directory record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub category: Category,
    pub version: String,
    pub access: Access,
    /// Ordered, duplicates allowed.
    pub tags: Vec<String>,
    pub summary: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub context: String,
    pub app_context: String,
    pub endpoints: Vec<Endpoint>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A company or organization building AI agents. Id uses the `vndr://{slug}`
/// scheme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Interfaces a system can be driven through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    Editor,
    Cli,
    Api,
}

impl Interface {
    pub fn label(&self) -> &'static str {
        match self {
            Interface::Editor => "editor",
            Interface::Cli => "cli",
            Interface::Api => "api",
        }
    }
}

impl std::fmt::Display for Interface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a system can run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Hosting {
    Local,
    Cloud,
}

impl Hosting {
    pub fn label(&self) -> &'static str {
        match self {
            Hosting::Local => "local",
            Hosting::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for Hosting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A shipped AI agent system/product. Id uses the
/// `sys://{vendor}/{name}@{version}` scheme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct System {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub title: String,
    pub version: String,
    pub interfaces: Vec<Interface>,
    pub hosting: Vec<Hosting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A pre-built agent configuration. Id uses the
/// `agt://{namespace}/{name}@{version}` scheme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub manifest: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Descriptor for a functional category, used for tab rendering and
/// tag-based template lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
