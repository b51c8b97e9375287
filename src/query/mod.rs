//! Query layer: the exact record sets each public page needs.
//!
//! Each function here corresponds to one public page (or the global
//! search box) and returns a serializable view model the rendering
//! collaborator turns into HTML. All reads go through [`Storage`];
//! nothing here holds state between calls, so identical parameters
//! against an unchanged store yield identical results.

use serde::Serialize;

use crate::models::{BlogPost, Project, ProjectCategory, Service, Skill, Testimonial};
use crate::storage::Storage;
use crate::{Error, Result};

/// Projects shown per listing page.
pub const PROJECTS_PER_PAGE: i64 = 9;

/// Posts shown per blog listing page.
pub const POSTS_PER_PAGE: i64 = 10;

/// Cap for featured sections on the home page.
pub const FEATURED_CAP: i64 = 3;

/// Cap for "related" sections on detail pages.
pub const RELATED_CAP: i64 = 3;

/// Per-type cap for global search result lists.
pub const SEARCH_CAP: i64 = 5;

/// One page of an ordered result set.
///
/// Page numbers are 1-based and clamped: a request beyond the last page
/// returns the last page's contents, and anything below 1 returns the
/// first page. An empty result set still reports one (empty) page.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,

    /// Current page number (1-based, already clamped)
    pub page: i64,

    /// Page size
    pub per_page: i64,

    /// Total records across all pages
    pub total_items: i64,

    /// Total number of pages (at least 1)
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Clamp a requested page number into the valid range for `total_items`.
fn clamp_page(requested: i64, total_items: i64, per_page: i64) -> (i64, i64) {
    let total_pages = ((total_items + per_page - 1) / per_page).max(1);
    (requested.clamp(1, total_pages), total_pages)
}

/// A category option for the projects filter control.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    /// Stable value used in URLs
    pub value: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Home page: featured content plus home-page skills.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub featured_projects: Vec<Project>,
    pub featured_posts: Vec<BlogPost>,
    pub skills: Vec<Skill>,
    pub testimonials: Vec<Testimonial>,
}

/// About page: the full skill set and every active testimonial.
#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub skills: Vec<Skill>,
    pub testimonials: Vec<Testimonial>,
}

/// Projects listing with filters and pagination.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsPage {
    pub projects: Page<Project>,
    /// The closed category set, for the filter control
    pub categories: Vec<CategoryOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<ProjectCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

/// Single project plus related projects in the same category.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub related: Vec<Project>,
}

/// Blog listing with filters and pagination (published posts only).
#[derive(Debug, Clone, Serialize)]
pub struct BlogPage {
    pub posts: Page<BlogPost>,
    /// Distinct category values across published posts
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

/// Single published post plus related published posts.
///
/// Produced by [`blog_detail`], which has already counted the view.
#[derive(Debug, Clone, Serialize)]
pub struct BlogDetail {
    pub post: BlogPost,
    pub related: Vec<BlogPost>,
}

/// Services page: active services plus featured testimonials.
#[derive(Debug, Clone, Serialize)]
pub struct ServicesPage {
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
}

/// Global search results across projects, posts, and services.
///
/// Each list is capped at [`SEARCH_CAP`]; `total_results` counts the
/// full matching sets, so it can exceed the sum of the displayed lists.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
    pub services: Vec<Service>,
    pub total_results: i64,
}

/// Build the home page view.
pub fn home_page(store: &Storage) -> Result<HomePage> {
    Ok(HomePage {
        featured_projects: store.featured_projects(FEATURED_CAP)?,
        featured_posts: store.featured_published_posts(FEATURED_CAP)?,
        skills: store.list_skills(true)?,
        testimonials: store.list_testimonials(true, FEATURED_CAP)?,
    })
}

/// Build the about page view.
pub fn about_page(store: &Storage) -> Result<AboutPage> {
    Ok(AboutPage {
        skills: store.list_skills(false)?,
        testimonials: store.list_testimonials(false, -1)?,
    })
}

/// Build the projects listing view.
///
/// `category` and `search` combine with logical AND when both present.
pub fn projects_page(
    store: &Storage,
    category: Option<ProjectCategory>,
    search: Option<&str>,
    page: i64,
) -> Result<ProjectsPage> {
    let search = search.filter(|s| !s.is_empty());

    let total_items = store.count_projects(category, search)?;
    let (page, total_pages) = clamp_page(page, total_items, PROJECTS_PER_PAGE);
    let offset = (page - 1) * PROJECTS_PER_PAGE;
    let items = store.list_projects(category, search, PROJECTS_PER_PAGE, offset)?;

    Ok(ProjectsPage {
        projects: Page {
            items,
            page,
            per_page: PROJECTS_PER_PAGE,
            total_items,
            total_pages,
        },
        categories: ProjectCategory::all()
            .iter()
            .map(|c| CategoryOption {
                value: c.as_str(),
                label: c.label(),
            })
            .collect(),
        current_category: category,
        search_query: search.map(String::from),
    })
}

/// Build the project detail view, or NotFound for an unknown slug.
pub fn project_detail(store: &Storage, slug: &str) -> Result<ProjectDetail> {
    let project = store.get_project_by_slug(slug)?;
    let related = store.related_projects(project.category, project.id, RELATED_CAP)?;
    Ok(ProjectDetail { project, related })
}

/// Build the blog listing view (published posts only).
pub fn blog_page(
    store: &Storage,
    category: Option<&str>,
    search: Option<&str>,
    page: i64,
) -> Result<BlogPage> {
    let search = search.filter(|s| !s.is_empty());
    let category = category.filter(|c| !c.is_empty());

    let total_items = store.count_published_posts(category, search)?;
    let (page, total_pages) = clamp_page(page, total_items, POSTS_PER_PAGE);
    let offset = (page - 1) * POSTS_PER_PAGE;
    let items = store.list_published_posts(category, search, POSTS_PER_PAGE, offset)?;

    Ok(BlogPage {
        posts: Page {
            items,
            page,
            per_page: POSTS_PER_PAGE,
            total_items,
            total_pages,
        },
        categories: store.published_categories()?,
        current_category: category.map(String::from),
        search_query: search.map(String::from),
    })
}

/// Build the blog detail view, or NotFound for an unknown or draft slug.
///
/// Counts the view: every call increments the post's counter by one, with
/// no deduplication across repeat visitors.
pub fn blog_detail(store: &mut Storage, slug: &str) -> Result<BlogDetail> {
    let post = store.record_post_view(slug)?;
    let related = store.related_published_posts(&post.category, post.id, RELATED_CAP)?;
    Ok(BlogDetail { post, related })
}

/// Build the services page view.
pub fn services_page(store: &Storage) -> Result<ServicesPage> {
    Ok(ServicesPage {
        services: store.list_active_services(None, -1)?,
        testimonials: store.list_testimonials(true, -1)?,
    })
}

/// Run the global search.
///
/// An empty query is invalid input; the web collaborator maps that to a
/// redirect home instead of a results page.
pub fn site_search(store: &Storage, query: &str) -> Result<SearchResults> {
    if query.is_empty() {
        return Err(Error::InvalidInput("Search query is empty".to_string()));
    }

    let projects = store.list_projects(None, Some(query), SEARCH_CAP, 0)?;
    let posts = store.list_published_posts(None, Some(query), SEARCH_CAP, 0)?;
    let services = store.list_active_services(Some(query), SEARCH_CAP)?;

    let total_results = store.count_projects(None, Some(query))?
        + store.count_published_posts(None, Some(query))?
        + store.count_active_services(Some(query))?;

    Ok(SearchResults {
        query: query.to_string(),
        projects,
        posts,
        services,
        total_results,
    })
}
