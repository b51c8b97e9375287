//! Data models for Folio entities.
//!
//! This module defines the core data structures:
//! - `Project` - Portfolio work with category, tech stack, and links
//! - `BlogPost` - Articles with draft/published workflow and view counts
//! - `Service` - Offered services with pricing and feature lists
//! - `Testimonial` - Client quotes, optionally tied to a project
//! - `Skill` - Skills shown on the home and about pages
//! - `ContactMessage` - Inbound contact-form submissions
//!
//! Technologies, tags, and features are stored as delimited text but
//! surfaced to callers as `Vec<String>` through the `*_list()` accessors;
//! the stored representation is an implementation detail of the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a project belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    #[default]
    Web,
    Mobile,
    Desktop,
    Data,
    Other,
}

impl ProjectCategory {
    /// Stable string value stored in the database and used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Desktop => "desktop",
            ProjectCategory::Data => "data",
            ProjectCategory::Other => "other",
        }
    }

    /// Human-readable label for filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web Development",
            ProjectCategory::Mobile => "Mobile App",
            ProjectCategory::Desktop => "Desktop Application",
            ProjectCategory::Data => "Data Science",
            ProjectCategory::Other => "Other",
        }
    }

    /// Get all categories, in display order.
    pub fn all() -> &'static [ProjectCategory] {
        &[
            ProjectCategory::Web,
            ProjectCategory::Mobile,
            ProjectCategory::Desktop,
            ProjectCategory::Data,
            ProjectCategory::Other,
        ]
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "web" => Ok(ProjectCategory::Web),
            "mobile" => Ok(ProjectCategory::Mobile),
            "desktop" => Ok(ProjectCategory::Desktop),
            "data" => Ok(ProjectCategory::Data),
            "other" => Ok(ProjectCategory::Other),
            _ => Err(format!("Unknown project category: {}", s)),
        }
    }
}

/// Publication status of a blog post.
///
/// Only published posts are visible through the query layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    /// Stable string value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            _ => Err(format!("Unknown post status: {}", s)),
        }
    }
}

/// Category a skill belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Tool,
    #[default]
    Other,
}

impl SkillCategory {
    /// Stable string value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Tool => "tool",
            SkillCategory::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Language => "Programming Language",
            SkillCategory::Framework => "Framework",
            SkillCategory::Database => "Database",
            SkillCategory::Tool => "Tool/Software",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "language" => Ok(SkillCategory::Language),
            "framework" => Ok(SkillCategory::Framework),
            "database" => Ok(SkillCategory::Database),
            "tool" => Ok(SkillCategory::Tool),
            "other" => Ok(SkillCategory::Other),
            _ => Err(format!("Unknown skill category: {}", s)),
        }
    }
}

/// Handling status of a contact message.
///
/// Transitions move forward only: new -> read -> replied. The timestamps
/// `read_at` and `replied_at` are set exactly once, at the transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl MessageStatus {
    /// Stable string value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "new" => Ok(MessageStatus::New),
            "read" => Ok(MessageStatus::Read),
            "replied" => Ok(MessageStatus::Replied),
            _ => Err(format!("Unknown message status: {}", s)),
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Database id (0 until persisted)
    #[serde(default)]
    pub id: i64,

    /// Project title
    pub title: String,

    /// Unique URL slug
    pub slug: String,

    /// Full description
    pub description: String,

    /// Short description for listing cards
    #[serde(default)]
    pub short_description: String,

    /// Project category
    #[serde(default)]
    pub category: ProjectCategory,

    /// Comma-separated tech stack, e.g. "Rust, SQLite, Axum"
    #[serde(default)]
    pub technologies: String,

    /// Source repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Live deployment URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    /// Demo video URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_video: Option<String>,

    /// Thumbnail image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Gallery image paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image3: Option<String>,

    /// Whether the project is highlighted on the home page
    #[serde(default)]
    pub featured: bool,

    /// Display order within listings (lower sorts first)
    #[serde(default)]
    pub display_order: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with the given title, slug, and description.
    pub fn new(title: String, slug: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            slug,
            description,
            short_description: String::new(),
            category: ProjectCategory::default(),
            technologies: String::new(),
            github_url: None,
            live_url: None,
            demo_video: None,
            thumbnail: None,
            image1: None,
            image2: None,
            image3: None,
            featured: false,
            display_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Technologies as a list.
    pub fn tech_list(&self) -> Vec<String> {
        split_delimited(&self.technologies, ',')
    }
}

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Database id (0 until persisted)
    #[serde(default)]
    pub id: i64,

    /// Post title
    pub title: String,

    /// Unique URL slug
    pub slug: String,

    /// Author, supplied explicitly at creation time
    pub author: String,

    /// Short preview shown in listings
    #[serde(default)]
    pub excerpt: String,

    /// Full article body
    #[serde(default)]
    pub content: String,

    /// Header image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Free-form category, e.g. "Tutorial"
    #[serde(default)]
    pub category: String,

    /// Comma-separated tags
    #[serde(default)]
    pub tags: String,

    /// Draft/published workflow state
    #[serde(default)]
    pub status: PostStatus,

    /// Whether the post is highlighted on the home page
    #[serde(default)]
    pub featured: bool,

    /// Estimated read time in minutes
    #[serde(default)]
    pub read_time: i64,

    /// Detail-page view counter (monotonically non-decreasing)
    #[serde(default)]
    pub views: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Publication timestamp, set when the post goes live
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Create a new draft post with the given title, slug, and author.
    pub fn new(title: String, slug: String, author: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            slug,
            author,
            excerpt: String::new(),
            content: String::new(),
            featured_image: None,
            category: "Tutorial".to_string(),
            tags: String::new(),
            status: PostStatus::default(),
            featured: false,
            read_time: 5,
            views: 0,
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    /// Tags as a list.
    pub fn tag_list(&self) -> Vec<String> {
        split_delimited(&self.tags, ',')
    }

    /// Whether the post is publicly visible.
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// A service offered through the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Database id (0 until persisted)
    #[serde(default)]
    pub id: i64,

    /// Service title
    pub title: String,

    /// Unique URL slug
    pub slug: String,

    /// Full description
    pub description: String,

    /// Short description for listing cards
    #[serde(default)]
    pub short_description: String,

    /// Price range, e.g. "$500 - $2000"
    #[serde(default)]
    pub price_range: String,

    /// Pricing basis, e.g. "Per Project"
    #[serde(default)]
    pub pricing_type: String,

    /// Newline-separated feature list
    #[serde(default)]
    pub features: String,

    /// Icon class for the renderer
    #[serde(default)]
    pub icon_class: String,

    /// Whether the service is currently offered
    #[serde(default)]
    pub active: bool,

    /// Display order within listings (lower sorts first)
    #[serde(default)]
    pub display_order: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Create a new active service with the given title, slug, and description.
    pub fn new(title: String, slug: String, description: String) -> Self {
        Self {
            id: 0,
            title,
            slug,
            description,
            short_description: String::new(),
            price_range: String::new(),
            pricing_type: "Per Project".to_string(),
            features: String::new(),
            icon_class: String::new(),
            active: true,
            display_order: 0,
            created_at: Utc::now(),
        }
    }

    /// Features as a list.
    pub fn features_list(&self) -> Vec<String> {
        split_delimited(&self.features, '\n')
    }
}

/// A client testimonial, optionally tied to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    /// Database id (0 until persisted)
    #[serde(default)]
    pub id: i64,

    /// Client name
    pub client_name: String,

    /// Client job title
    #[serde(default)]
    pub client_position: String,

    /// Client company
    #[serde(default)]
    pub client_company: String,

    /// Client photo path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_photo: Option<String>,

    /// The testimonial text
    pub quote: String,

    /// Star rating, expected within 1-5
    #[serde(default = "default_rating")]
    pub rating: u8,

    /// Project this testimonial refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    /// Whether the testimonial is shown at all
    #[serde(default)]
    pub active: bool,

    /// Whether the testimonial is highlighted on home/services pages
    #[serde(default)]
    pub featured: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// Create a new active testimonial with the given client name and quote.
    pub fn new(client_name: String, quote: String) -> Self {
        Self {
            id: 0,
            client_name,
            client_position: String::new(),
            client_company: String::new(),
            client_photo: None,
            quote,
            rating: 5,
            project_id: None,
            active: true,
            featured: false,
            created_at: Utc::now(),
        }
    }
}

/// A skill shown on the home and about pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Database id (0 until persisted)
    #[serde(default)]
    pub id: i64,

    /// Skill name, e.g. "Rust"
    pub name: String,

    /// Skill category
    #[serde(default)]
    pub category: SkillCategory,

    /// Proficiency percentage, intended within 0-100
    #[serde(default = "default_proficiency")]
    pub proficiency: u8,

    /// Icon class for the renderer
    #[serde(default)]
    pub icon_class: String,

    /// Whether the skill appears on the home page
    #[serde(default)]
    pub show_on_home: bool,

    /// Display order within its category (lower sorts first)
    #[serde(default)]
    pub display_order: i64,
}

fn default_proficiency() -> u8 {
    50
}

impl Skill {
    /// Create a new skill with the given name and category.
    pub fn new(name: String, category: SkillCategory) -> Self {
        Self {
            id: 0,
            name,
            category,
            proficiency: 50,
            icon_class: String::new(),
            show_on_home: true,
            display_order: 0,
        }
    }
}

/// An inbound contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Database id (0 until persisted)
    #[serde(default)]
    pub id: i64,

    /// Sender name
    pub name: String,

    /// Sender email, used as the Reply-To of the notification
    pub email: String,

    /// Sender phone (optional, may be empty)
    #[serde(default)]
    pub phone: String,

    /// Message subject
    pub subject: String,

    /// Message body
    pub message: String,

    /// Handling status
    #[serde(default)]
    pub status: MessageStatus,

    /// Submission timestamp
    pub created_at: DateTime<Utc>,

    /// When the message was first read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,

    /// When the message was replied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<DateTime<Utc>>,
}

impl ContactMessage {
    /// Create a new unread message with the given sender and content.
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            phone: String::new(),
            subject,
            message,
            status: MessageStatus::default(),
            created_at: Utc::now(),
            read_at: None,
            replied_at: None,
        }
    }
}

/// Split delimited text into trimmed, non-empty tokens.
fn split_delimited(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
