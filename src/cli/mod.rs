//! CLI argument definitions for Folio.

use clap::{Parser, Subcommand};

/// Folio - the data core of a personal portfolio and blog site.
///
/// Run `folio init` once, load content with the `project`/`post`/
/// `service`/`skill`/`testimonial` commands, then let the site renderer
/// consume `folio page ...` output.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio and blog data core", long_about = None)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("FOLIO_GIT_COMMIT"), ", built ", env!("FOLIO_BUILD_TIMESTAMP"), ")"
))]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Use <path> as the data directory instead of the default.
    /// Can also be set via the FOLIO_DATA_DIR environment variable.
    #[arg(short = 'C', long = "data-dir", global = true, env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the site database
    Init,

    /// Produce the view model for a public page
    Page {
        #[command(subcommand)]
        command: PageCommands,
    },

    /// Global search across projects, published posts, and active services
    Search {
        /// Search query (must be non-empty)
        query: String,
    },

    /// Contact-form intake and message administration
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },

    /// Project management commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Blog post management commands
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Service management commands
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },

    /// Skill management commands
    Skill {
        #[command(subcommand)]
        command: SkillCommands,
    },

    /// Testimonial management commands
    Testimonial {
        #[command(subcommand)]
        command: TestimonialCommands,
    },
}

/// Public page view models
#[derive(Subcommand, Debug)]
pub enum PageCommands {
    /// Home page: featured projects/posts, home skills, testimonials
    Home,

    /// About page: all skills and active testimonials
    About,

    /// Projects listing with optional filters, 9 per page
    Projects {
        /// Filter by category (web, mobile, desktop, data, other)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive substring search over title/description/technologies
        #[arg(long)]
        search: Option<String>,

        /// Page number (out-of-range values clamp to the nearest page)
        #[arg(long, default_value_t = 1)]
        page: i64,
    },

    /// Single project by slug, with related projects
    Project {
        /// Project slug
        slug: String,
    },

    /// Blog listing (published posts only), 10 per page
    Blog {
        /// Filter by exact category value
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive substring search over title/content/tags
        #[arg(long)]
        search: Option<String>,

        /// Page number (out-of-range values clamp to the nearest page)
        #[arg(long, default_value_t = 1)]
        page: i64,
    },

    /// Single published post by slug; counts one view
    Post {
        /// Post slug
        slug: String,
    },

    /// Services page: active services and featured testimonials
    Services,
}

/// Contact-form intake and administration
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Submit a contact message (validates, persists, notifies)
    Submit {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email (must contain '@' and '.')
        #[arg(long)]
        email: String,

        /// Sender phone (optional)
        #[arg(long, default_value = "")]
        phone: String,

        /// Message subject
        #[arg(long)]
        subject: String,

        /// Message body
        #[arg(long)]
        message: String,
    },

    /// List contact messages, newest first
    List {
        /// Filter by status (new, read, replied)
        #[arg(long)]
        status: Option<String>,
    },

    /// Mark a message as read (no-op unless it is still new)
    Read {
        /// Message id
        id: i64,
    },

    /// Mark a message as replied
    Replied {
        /// Message id
        id: i64,
    },
}

/// Project management
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Add a project
    Add {
        /// Project title
        title: String,

        /// URL slug (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Full description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Short description for listing cards
        #[arg(long, default_value = "")]
        short_description: String,

        /// Category (web, mobile, desktop, data, other)
        #[arg(long, default_value = "web")]
        category: String,

        /// Comma-separated tech stack
        #[arg(long, default_value = "")]
        technologies: String,

        /// Source repository URL
        #[arg(long)]
        github_url: Option<String>,

        /// Live deployment URL
        #[arg(long)]
        live_url: Option<String>,

        /// Highlight on the home page
        #[arg(long)]
        featured: bool,

        /// Display order (lower sorts first)
        #[arg(long, default_value_t = 0)]
        order: i64,
    },
}

/// Blog post management
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Add a post (draft unless --publish is given)
    Add {
        /// Post title
        title: String,

        /// URL slug (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Author (required; posts carry no implicit author)
        #[arg(long)]
        author: String,

        /// Short preview shown in listings
        #[arg(long, default_value = "")]
        excerpt: String,

        /// Full article body
        #[arg(long, default_value = "")]
        content: String,

        /// Category
        #[arg(long, default_value = "Tutorial")]
        category: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Highlight on the home page
        #[arg(long)]
        featured: bool,

        /// Estimated read time in minutes
        #[arg(long, default_value_t = 5)]
        read_time: i64,

        /// Publish immediately instead of leaving a draft
        #[arg(long)]
        publish: bool,
    },

    /// Publish a draft post
    Publish {
        /// Post slug
        slug: String,
    },
}

/// Service management
#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// Add a service
    Add {
        /// Service title
        title: String,

        /// URL slug (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Full description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Short description for listing cards
        #[arg(long, default_value = "")]
        short_description: String,

        /// Price range, e.g. "$500 - $2000"
        #[arg(long, default_value = "")]
        price_range: String,

        /// Pricing basis
        #[arg(long, default_value = "Per Project")]
        pricing_type: String,

        /// Newline-separated feature list
        #[arg(long, default_value = "")]
        features: String,

        /// Hide from the services page
        #[arg(long)]
        inactive: bool,

        /// Display order (lower sorts first)
        #[arg(long, default_value_t = 0)]
        order: i64,
    },
}

/// Skill management
#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// Add a skill
    Add {
        /// Skill name
        name: String,

        /// Category (language, framework, database, tool, other)
        #[arg(long)]
        category: String,

        /// Proficiency percentage (0-100)
        #[arg(long, default_value_t = 50)]
        proficiency: u8,

        /// Keep the skill off the home page
        #[arg(long)]
        hidden: bool,

        /// Display order within its category
        #[arg(long, default_value_t = 0)]
        order: i64,
    },
}

/// Testimonial management
#[derive(Subcommand, Debug)]
pub enum TestimonialCommands {
    /// Add a testimonial
    Add {
        /// Client name
        name: String,

        /// Testimonial text
        #[arg(long)]
        quote: String,

        /// Client job title
        #[arg(long, default_value = "")]
        position: String,

        /// Client company
        #[arg(long, default_value = "")]
        company: String,

        /// Star rating (1-5)
        #[arg(long, default_value_t = 5)]
        rating: u8,

        /// Slug of the project this testimonial refers to
        #[arg(long)]
        project: Option<String>,

        /// Highlight on home/services pages
        #[arg(long)]
        featured: bool,

        /// Hide entirely
        #[arg(long)]
        inactive: bool,
    },
}
