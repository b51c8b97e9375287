//! Command implementations for the Folio CLI.
//!
//! Each function opens storage for the data directory, runs one
//! operation, and returns a result that renders as JSON (default) or
//! human-readable text via [`CommandResult`]. The page commands return
//! the query-layer view models unchanged; that JSON is the contract the
//! site renderer consumes.

use std::path::Path;

use serde::Serialize;

use crate::cli::{PostCommands, ProjectCommands, ServiceCommands, SkillCommands,
    TestimonialCommands};
use crate::config;
use crate::contact::{self, ContactForm};
use crate::models::{
    BlogPost, ContactMessage, MessageStatus, Project, ProjectCategory, Service, Skill,
    SkillCategory, Testimonial,
};
use crate::notify::{Notifier, SendmailTransport};
use crate::query::{
    self, AboutPage, BlogDetail, BlogPage, HomePage, ProjectDetail, ProjectsPage, SearchResults,
    ServicesPage,
};
use crate::storage::Storage;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Result of `folio init`.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    /// Data directory holding the database
    pub data_dir: String,
}

impl CommandResult for InitOutput {
    fn to_human(&self) -> String {
        format!("Initialized folio data in {}", self.data_dir)
    }
}

/// Result of an administrative write.
#[derive(Debug, Serialize)]
pub struct Saved {
    /// Database id of the affected record
    pub id: i64,

    /// Slug of the affected record, when it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// One-line summary of what happened
    pub detail: String,
}

impl CommandResult for Saved {
    fn to_human(&self) -> String {
        self.detail.clone()
    }
}

/// A single contact message.
#[derive(Debug, Serialize)]
pub struct MessageOutput {
    #[serde(flatten)]
    pub message: ContactMessage,
}

impl CommandResult for MessageOutput {
    fn to_human(&self) -> String {
        let m = &self.message;
        format!(
            "#{} [{}] {} <{}>: {}",
            m.id, m.status, m.name, m.email, m.subject
        )
    }
}

/// A list of contact messages.
#[derive(Debug, Serialize)]
pub struct MessageList {
    pub count: usize,
    pub messages: Vec<ContactMessage>,
}

impl CommandResult for MessageList {
    fn to_human(&self) -> String {
        if self.messages.is_empty() {
            return "No messages found.".to_string();
        }
        self.messages
            .iter()
            .map(|m| {
                format!(
                    "#{} [{}] {} <{}>: {}",
                    m.id, m.status, m.name, m.email, m.subject
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// === Init ===

/// Initialize the site database.
pub fn init(data_dir: &Path) -> Result<InitOutput> {
    Storage::init_at(data_dir)?;
    Ok(InitOutput {
        data_dir: data_dir.display().to_string(),
    })
}

// === Pages ===

/// Home page view model.
pub fn page_home(data_dir: &Path) -> Result<HomePage> {
    let storage = Storage::open_at(data_dir)?;
    query::home_page(&storage)
}

/// About page view model.
pub fn page_about(data_dir: &Path) -> Result<AboutPage> {
    let storage = Storage::open_at(data_dir)?;
    query::about_page(&storage)
}

/// Projects listing view model.
pub fn page_projects(
    data_dir: &Path,
    category: Option<&str>,
    search: Option<&str>,
    page: i64,
) -> Result<ProjectsPage> {
    let storage = Storage::open_at(data_dir)?;
    let category = category.map(parse_project_category).transpose()?;
    query::projects_page(&storage, category, search, page)
}

/// Project detail view model.
pub fn page_project(data_dir: &Path, slug: &str) -> Result<ProjectDetail> {
    let storage = Storage::open_at(data_dir)?;
    query::project_detail(&storage, slug)
}

/// Blog listing view model.
pub fn page_blog(
    data_dir: &Path,
    category: Option<&str>,
    search: Option<&str>,
    page: i64,
) -> Result<BlogPage> {
    let storage = Storage::open_at(data_dir)?;
    query::blog_page(&storage, category, search, page)
}

/// Blog detail view model; counts one view.
pub fn page_post(data_dir: &Path, slug: &str) -> Result<BlogDetail> {
    let mut storage = Storage::open_at(data_dir)?;
    query::blog_detail(&mut storage, slug)
}

/// Services page view model.
pub fn page_services(data_dir: &Path) -> Result<ServicesPage> {
    let storage = Storage::open_at(data_dir)?;
    query::services_page(&storage)
}

// === Search ===

/// Global search across projects, published posts, and active services.
pub fn search(data_dir: &Path, query_string: &str) -> Result<SearchResults> {
    let storage = Storage::open_at(data_dir)?;
    query::site_search(&storage, query_string)
}

// === Contact ===

/// Submit a contact message: validate, persist, notify best-effort.
pub fn contact_submit(
    data_dir: &Path,
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
) -> Result<MessageOutput> {
    let mut storage = Storage::open_at(data_dir)?;
    let resolved = config::resolve(data_dir)?;
    let notifier = Notifier::new(
        resolved.admin_email,
        resolved.base_url,
        Box::new(SendmailTransport::new(resolved.sendmail_program)),
    );

    let form = ContactForm {
        name,
        email,
        phone,
        subject,
        message,
    };
    let message = contact::submit(&mut storage, &notifier, &form)?;
    Ok(MessageOutput { message })
}

/// List contact messages, optionally filtered by status.
pub fn contact_list(data_dir: &Path, status: Option<&str>) -> Result<MessageList> {
    let storage = Storage::open_at(data_dir)?;
    let status = status.map(parse_message_status).transpose()?;
    let messages = storage.list_contact_messages(status)?;
    Ok(MessageList {
        count: messages.len(),
        messages,
    })
}

/// Mark a contact message as read.
pub fn contact_read(data_dir: &Path, id: i64) -> Result<MessageOutput> {
    let mut storage = Storage::open_at(data_dir)?;
    let message = storage.mark_message_read(id)?;
    Ok(MessageOutput { message })
}

/// Mark a contact message as replied.
pub fn contact_replied(data_dir: &Path, id: i64) -> Result<MessageOutput> {
    let mut storage = Storage::open_at(data_dir)?;
    let message = storage.mark_message_replied(id)?;
    Ok(MessageOutput { message })
}

// === Content administration ===

/// Run a project management command.
pub fn project(data_dir: &Path, command: ProjectCommands) -> Result<Saved> {
    let mut storage = Storage::open_at(data_dir)?;
    match command {
        ProjectCommands::Add {
            title,
            slug,
            description,
            short_description,
            category,
            technologies,
            github_url,
            live_url,
            featured,
            order,
        } => {
            let slug = slug.unwrap_or_else(|| slugify(&title));
            let mut project = Project::new(title, slug, description);
            project.short_description = short_description;
            project.category = parse_project_category(&category)?;
            project.technologies = technologies;
            project.github_url = github_url;
            project.live_url = live_url;
            project.featured = featured;
            project.display_order = order;
            storage.add_project(&mut project)?;

            Ok(Saved {
                id: project.id,
                detail: format!("Created project '{}' ({})", project.title, project.slug),
                slug: Some(project.slug),
            })
        }
    }
}

/// Run a blog post management command.
pub fn post(data_dir: &Path, command: PostCommands) -> Result<Saved> {
    let mut storage = Storage::open_at(data_dir)?;
    match command {
        PostCommands::Add {
            title,
            slug,
            author,
            excerpt,
            content,
            category,
            tags,
            featured,
            read_time,
            publish,
        } => {
            let slug = slug.unwrap_or_else(|| slugify(&title));
            let mut post = BlogPost::new(title, slug, author);
            post.excerpt = excerpt;
            post.content = content;
            post.category = category;
            post.tags = tags;
            post.featured = featured;
            post.read_time = read_time;
            storage.add_post(&mut post)?;

            if publish {
                let published = storage.publish_post(&post.slug)?;
                return Ok(Saved {
                    id: published.id,
                    detail: format!("Published post '{}' ({})", published.title, published.slug),
                    slug: Some(published.slug),
                });
            }

            Ok(Saved {
                id: post.id,
                detail: format!("Created draft post '{}' ({})", post.title, post.slug),
                slug: Some(post.slug),
            })
        }
        PostCommands::Publish { slug } => {
            let published = storage.publish_post(&slug)?;
            Ok(Saved {
                id: published.id,
                detail: format!("Published post '{}' ({})", published.title, published.slug),
                slug: Some(published.slug),
            })
        }
    }
}

/// Run a service management command.
pub fn service(data_dir: &Path, command: ServiceCommands) -> Result<Saved> {
    let mut storage = Storage::open_at(data_dir)?;
    match command {
        ServiceCommands::Add {
            title,
            slug,
            description,
            short_description,
            price_range,
            pricing_type,
            features,
            inactive,
            order,
        } => {
            let slug = slug.unwrap_or_else(|| slugify(&title));
            let mut service = Service::new(title, slug, description);
            service.short_description = short_description;
            service.price_range = price_range;
            service.pricing_type = pricing_type;
            service.features = features;
            service.active = !inactive;
            service.display_order = order;
            storage.add_service(&mut service)?;

            Ok(Saved {
                id: service.id,
                detail: format!("Created service '{}' ({})", service.title, service.slug),
                slug: Some(service.slug),
            })
        }
    }
}

/// Run a skill management command.
pub fn skill(data_dir: &Path, command: SkillCommands) -> Result<Saved> {
    let mut storage = Storage::open_at(data_dir)?;
    match command {
        SkillCommands::Add {
            name,
            category,
            proficiency,
            hidden,
            order,
        } => {
            let mut skill = Skill::new(name, parse_skill_category(&category)?);
            skill.proficiency = proficiency;
            skill.show_on_home = !hidden;
            skill.display_order = order;
            storage.add_skill(&mut skill)?;

            Ok(Saved {
                id: skill.id,
                detail: format!("Created skill '{}'", skill.name),
                slug: None,
            })
        }
    }
}

/// Run a testimonial management command.
pub fn testimonial(data_dir: &Path, command: TestimonialCommands) -> Result<Saved> {
    let mut storage = Storage::open_at(data_dir)?;
    match command {
        TestimonialCommands::Add {
            name,
            quote,
            position,
            company,
            rating,
            project,
            featured,
            inactive,
        } => {
            let project_id = match project {
                Some(slug) => Some(storage.get_project_by_slug(&slug)?.id),
                None => None,
            };

            let mut testimonial = Testimonial::new(name, quote);
            testimonial.client_position = position;
            testimonial.client_company = company;
            testimonial.rating = rating;
            testimonial.project_id = project_id;
            testimonial.featured = featured;
            testimonial.active = !inactive;
            storage.add_testimonial(&mut testimonial)?;

            Ok(Saved {
                id: testimonial.id,
                detail: format!("Created testimonial from '{}'", testimonial.client_name),
                slug: None,
            })
        }
    }
}

// === Parsing helpers ===

fn parse_project_category(s: &str) -> Result<ProjectCategory> {
    s.parse().map_err(Error::InvalidInput)
}

fn parse_skill_category(s: &str) -> Result<SkillCategory> {
    s.parse().map_err(Error::InvalidInput)
}

fn parse_message_status(s: &str) -> Result<MessageStatus> {
    s.parse().map_err(Error::InvalidInput)
}

/// Derive a URL slug from a title: lowercase, alphanumerics kept,
/// everything else collapsed into single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

// === Human formatting for page view models ===

fn project_line(p: &Project) -> String {
    format!("  - {} [{}] ({})", p.title, p.category, p.slug)
}

fn post_line(p: &BlogPost) -> String {
    format!("  - {} [{}] ({})", p.title, p.category, p.slug)
}

impl CommandResult for HomePage {
    fn to_human(&self) -> String {
        let mut out = String::from("Featured projects:\n");
        for p in &self.featured_projects {
            out.push_str(&project_line(p));
            out.push('\n');
        }
        out.push_str("Featured posts:\n");
        for p in &self.featured_posts {
            out.push_str(&post_line(p));
            out.push('\n');
        }
        out.push_str("Skills: ");
        out.push_str(
            &self
                .skills
                .iter()
                .map(|s| format!("{} ({}%)", s.name, s.proficiency))
                .collect::<Vec<_>>()
                .join(", "),
        );
        out.push_str(&format!("\nTestimonials: {}\n", self.testimonials.len()));
        out
    }
}

impl CommandResult for AboutPage {
    fn to_human(&self) -> String {
        format!(
            "Skills: {}\nTestimonials: {}",
            self.skills
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            self.testimonials.len()
        )
    }
}

impl CommandResult for ProjectsPage {
    fn to_human(&self) -> String {
        let mut out = format!(
            "Projects page {}/{} ({} total)\n",
            self.projects.page, self.projects.total_pages, self.projects.total_items
        );
        for p in &self.projects.items {
            out.push_str(&project_line(p));
            out.push('\n');
        }
        out
    }
}

impl CommandResult for ProjectDetail {
    fn to_human(&self) -> String {
        let mut out = format!(
            "{} [{}]\n{}\nTech: {}\n",
            self.project.title,
            self.project.category,
            self.project.description,
            self.project.tech_list().join(", ")
        );
        if !self.related.is_empty() {
            out.push_str("Related:\n");
            for p in &self.related {
                out.push_str(&project_line(p));
                out.push('\n');
            }
        }
        out
    }
}

impl CommandResult for BlogPage {
    fn to_human(&self) -> String {
        let mut out = format!(
            "Blog page {}/{} ({} total)\n",
            self.posts.page, self.posts.total_pages, self.posts.total_items
        );
        for p in &self.posts.items {
            out.push_str(&post_line(p));
            out.push('\n');
        }
        if !self.categories.is_empty() {
            out.push_str(&format!("Categories: {}\n", self.categories.join(", ")));
        }
        out
    }
}

impl CommandResult for BlogDetail {
    fn to_human(&self) -> String {
        let mut out = format!(
            "{} by {} ({} views)\n{}\n",
            self.post.title, self.post.author, self.post.views, self.post.content
        );
        if !self.related.is_empty() {
            out.push_str("Related:\n");
            for p in &self.related {
                out.push_str(&post_line(p));
                out.push('\n');
            }
        }
        out
    }
}

impl CommandResult for ServicesPage {
    fn to_human(&self) -> String {
        let mut out = String::from("Services:\n");
        for s in &self.services {
            out.push_str(&format!("  - {} ({})\n", s.title, s.price_range));
        }
        out.push_str(&format!("Testimonials: {}\n", self.testimonials.len()));
        out
    }
}

impl CommandResult for SearchResults {
    fn to_human(&self) -> String {
        let mut out = format!("{} results for '{}'\n", self.total_results, self.query);
        if !self.projects.is_empty() {
            out.push_str("Projects:\n");
            for p in &self.projects {
                out.push_str(&project_line(p));
                out.push('\n');
            }
        }
        if !self.posts.is_empty() {
            out.push_str("Posts:\n");
            for p in &self.posts {
                out.push_str(&post_line(p));
                out.push('\n');
            }
        }
        if !self.services.is_empty() {
            out.push_str("Services:\n");
            for s in &self.services {
                out.push_str(&format!("  - {} ({})\n", s.title, s.slug));
            }
        }
        out
    }
}
