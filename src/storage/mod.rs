//! Storage layer for Folio data.
//!
//! This module handles persistence of every site entity in a single
//! SQLite database (`folio.db`) under the data directory. The store is
//! the only shared resource in the system; each operation is a single
//! statement, so the database's native transactionality is all the
//! coordination the core relies on.
//!
//! Data directory resolution: `FOLIO_DATA_DIR` env var, falling back to
//! the platform data directory (`~/.local/share/folio` on Linux).
//!
//! Public writes are limited to contact-message creation, the blog view
//! counter, and the contact status transitions; everything else is
//! written by the administrative collaborator through the `add_*`
//! methods and read back by the query layer.

use crate::models::{
    BlogPost, ContactMessage, MessageStatus, PostStatus, Project, ProjectCategory, Service, Skill,
    SkillCategory, Testimonial,
};
use crate::{Error, Result};
use chrono::Utc;
use rusqlite::{Connection, Row, params};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Database file name inside the data directory.
const DB_FILE: &str = "folio.db";

const PROJECT_COLS: &str = "id, title, slug, description, short_description, category, \
     technologies, github_url, live_url, demo_video, thumbnail, image1, image2, image3, \
     featured, display_order, created_at, updated_at";

const POST_COLS: &str = "id, title, slug, author, excerpt, content, featured_image, category, \
     tags, status, featured, read_time, views, created_at, updated_at, published_at";

const SERVICE_COLS: &str = "id, title, slug, description, short_description, price_range, \
     pricing_type, features, icon_class, active, display_order, created_at";

const TESTIMONIAL_COLS: &str = "id, client_name, client_position, client_company, client_photo, \
     quote, rating, project_id, active, featured, created_at";

const SKILL_COLS: &str = "id, name, category, proficiency, icon_class, show_on_home, display_order";

const MESSAGE_COLS: &str =
    "id, name, email, phone, subject, message, status, created_at, read_at, replied_at";

/// Storage manager for the site database.
pub struct Storage {
    /// Data directory holding the database
    pub root: PathBuf,
    /// SQLite connection
    conn: Connection,
}

impl Storage {
    /// Open existing storage in the default data directory.
    pub fn open() -> Result<Self> {
        Self::open_at(&default_data_dir()?)
    }

    /// Initialize storage in the default data directory.
    pub fn init() -> Result<Self> {
        Self::init_at(&default_data_dir()?)
    }

    /// Check whether storage exists in the default data directory.
    pub fn exists() -> Result<bool> {
        Ok(default_data_dir()?.join(DB_FILE).exists())
    }

    /// Open existing storage in the given data directory.
    pub fn open_at(data_dir: &Path) -> Result<Self> {
        let db_path = data_dir.join(DB_FILE);
        if !db_path.exists() {
            return Err(Error::NotInitialized);
        }

        let conn = Connection::open(&db_path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            root: data_dir.to_path_buf(),
            conn,
        })
    }

    /// Initialize storage in the given data directory, creating it if needed.
    pub fn init_at(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            root: data_dir.to_path_buf(),
            conn,
        })
    }

    /// Check whether storage exists in the given data directory.
    pub fn exists_at(data_dir: &Path) -> bool {
        data_dir.join(DB_FILE).exists()
    }

    /// Initialize the SQLite schema.
    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL,
                short_description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT 'web',
                technologies TEXT NOT NULL DEFAULT '',
                github_url TEXT,
                live_url TEXT,
                demo_video TEXT,
                thumbnail TEXT,
                image1 TEXT,
                image2 TEXT,
                image3 TEXT,
                featured INTEGER NOT NULL DEFAULT 0,
                display_order INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_projects_category ON projects(category);
            CREATE INDEX IF NOT EXISTS idx_projects_featured ON projects(featured);

            CREATE TABLE IF NOT EXISTS blog_posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                author TEXT NOT NULL,
                excerpt TEXT NOT NULL DEFAULT '',
                content TEXT NOT NULL DEFAULT '',
                featured_image TEXT,
                category TEXT NOT NULL DEFAULT 'Tutorial',
                tags TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'draft',
                featured INTEGER NOT NULL DEFAULT 0,
                read_time INTEGER NOT NULL DEFAULT 5,
                views INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                published_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_blog_posts_status ON blog_posts(status);
            CREATE INDEX IF NOT EXISTS idx_blog_posts_category ON blog_posts(category);

            CREATE TABLE IF NOT EXISTS services (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL,
                short_description TEXT NOT NULL DEFAULT '',
                price_range TEXT NOT NULL DEFAULT '',
                pricing_type TEXT NOT NULL DEFAULT 'Per Project',
                features TEXT NOT NULL DEFAULT '',
                icon_class TEXT NOT NULL DEFAULT '',
                active INTEGER NOT NULL DEFAULT 1,
                display_order INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_services_active ON services(active);

            CREATE TABLE IF NOT EXISTS testimonials (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                client_name TEXT NOT NULL,
                client_position TEXT NOT NULL DEFAULT '',
                client_company TEXT NOT NULL DEFAULT '',
                client_photo TEXT,
                quote TEXT NOT NULL,
                rating INTEGER NOT NULL DEFAULT 5,
                project_id INTEGER REFERENCES projects(id) ON DELETE SET NULL,
                active INTEGER NOT NULL DEFAULT 1,
                featured INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_testimonials_active ON testimonials(active);

            CREATE TABLE IF NOT EXISTS skills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                proficiency INTEGER NOT NULL DEFAULT 50,
                icon_class TEXT NOT NULL DEFAULT '',
                show_on_home INTEGER NOT NULL DEFAULT 1,
                display_order INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL DEFAULT '',
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'new',
                created_at TEXT NOT NULL,
                read_at TEXT,
                replied_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_contact_messages_status ON contact_messages(status);
            "#,
        )?;

        Ok(())
    }

    // === Project Operations ===

    /// Add a new project, assigning its database id.
    pub fn add_project(&mut self, project: &mut Project) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO projects
            (title, slug, description, short_description, category, technologies,
             github_url, live_url, demo_video, thumbnail, image1, image2, image3,
             featured, display_order, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
            "#,
            params![
                project.title,
                project.slug,
                project.description,
                project.short_description,
                project.category.as_str(),
                project.technologies,
                project.github_url,
                project.live_url,
                project.demo_video,
                project.thumbnail,
                project.image1,
                project.image2,
                project.image3,
                project.featured,
                project.display_order,
                project.created_at,
                project.updated_at,
            ],
        )?;
        project.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// Get a project by id.
    pub fn get_project(&self, id: i64) -> Result<Project> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM projects WHERE id = ?1", PROJECT_COLS),
                [id],
                row_to_project,
            )
            .map_err(|e| not_found(e, format!("Project not found: {}", id)))
    }

    /// Get a project by slug.
    pub fn get_project_by_slug(&self, slug: &str) -> Result<Project> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM projects WHERE slug = ?1", PROJECT_COLS),
                [slug],
                row_to_project,
            )
            .map_err(|e| not_found(e, format!("Project not found: {}", slug)))
    }

    /// List projects, optionally filtered by category and/or a
    /// case-insensitive substring search over title, description, and
    /// technologies. Pass a negative `limit` for no limit.
    pub fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>> {
        let mut sql = format!("SELECT {} FROM projects WHERE 1=1", PROJECT_COLS);
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        push_project_filters(&mut sql, &mut params_vec, category, search);

        sql.push_str(" ORDER BY featured DESC, display_order ASC, created_at DESC");
        sql.push_str(" LIMIT ? OFFSET ?");
        params_vec.push(Box::new(limit));
        params_vec.push(Box::new(offset));

        self.query_projects(&sql, &params_vec)
    }

    /// Count projects matching the same filters as [`Self::list_projects`].
    pub fn count_projects(
        &self,
        category: Option<ProjectCategory>,
        search: Option<&str>,
    ) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM projects WHERE 1=1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        push_project_filters(&mut sql, &mut params_vec, category, search);

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let count = self
            .conn
            .query_row(&sql, params_refs.as_slice(), |row| row.get(0))?;
        Ok(count)
    }

    /// List featured projects, capped at `limit`.
    pub fn featured_projects(&self, limit: i64) -> Result<Vec<Project>> {
        let sql = format!(
            "SELECT {} FROM projects WHERE featured = 1
             ORDER BY featured DESC, display_order ASC, created_at DESC LIMIT ?1",
            PROJECT_COLS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let projects = stmt
            .query_map([limit], row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    /// List up to `limit` other projects in the same category.
    pub fn related_projects(
        &self,
        category: ProjectCategory,
        exclude_id: i64,
        limit: i64,
    ) -> Result<Vec<Project>> {
        let sql = format!(
            "SELECT {} FROM projects WHERE category = ?1 AND id != ?2
             ORDER BY featured DESC, display_order ASC, created_at DESC LIMIT ?3",
            PROJECT_COLS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let projects = stmt
            .query_map(params![category.as_str(), exclude_id, limit], row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    fn query_projects(
        &self,
        sql: &str,
        params_vec: &[Box<dyn rusqlite::ToSql>],
    ) -> Result<Vec<Project>> {
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let mut stmt = self.conn.prepare(sql)?;
        let projects = stmt
            .query_map(params_refs.as_slice(), row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    // === Blog Post Operations ===

    /// Add a new blog post, assigning its database id.
    pub fn add_post(&mut self, post: &mut BlogPost) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO blog_posts
            (title, slug, author, excerpt, content, featured_image, category, tags,
             status, featured, read_time, views, created_at, updated_at, published_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                post.title,
                post.slug,
                post.author,
                post.excerpt,
                post.content,
                post.featured_image,
                post.category,
                post.tags,
                post.status.as_str(),
                post.featured,
                post.read_time,
                post.views,
                post.created_at,
                post.updated_at,
                post.published_at,
            ],
        )?;
        post.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// Get a post by slug regardless of status (administrative use).
    pub fn get_post_by_slug(&self, slug: &str) -> Result<BlogPost> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM blog_posts WHERE slug = ?1", POST_COLS),
                [slug],
                row_to_post,
            )
            .map_err(|e| not_found(e, format!("Blog post not found: {}", slug)))
    }

    /// Get a published post by slug. Drafts are reported as not found.
    pub fn get_published_post_by_slug(&self, slug: &str) -> Result<BlogPost> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM blog_posts WHERE slug = ?1 AND status = 'published'",
                    POST_COLS
                ),
                [slug],
                row_to_post,
            )
            .map_err(|e| not_found(e, format!("Blog post not found: {}", slug)))
    }

    /// Record one detail-page view of a published post and return the post
    /// with the incremented counter.
    ///
    /// The increment is a single `views = views + 1` statement; concurrent
    /// viewers may race and lose updates, which is acceptable for an
    /// analytics counter.
    pub fn record_post_view(&mut self, slug: &str) -> Result<BlogPost> {
        let updated = self.conn.execute(
            "UPDATE blog_posts SET views = views + 1 WHERE slug = ?1 AND status = 'published'",
            [slug],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Blog post not found: {}", slug)));
        }
        self.get_published_post_by_slug(slug)
    }

    /// List published posts, optionally filtered by exact category and/or a
    /// case-insensitive substring search over title, content, and tags.
    /// Pass a negative `limit` for no limit.
    pub fn list_published_posts(
        &self,
        category: Option<&str>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>> {
        let mut sql = format!(
            "SELECT {} FROM blog_posts WHERE status = 'published'",
            POST_COLS
        );
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        push_post_filters(&mut sql, &mut params_vec, category, search);

        sql.push_str(" ORDER BY published_at DESC, created_at DESC");
        sql.push_str(" LIMIT ? OFFSET ?");
        params_vec.push(Box::new(limit));
        params_vec.push(Box::new(offset));

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let posts = stmt
            .query_map(params_refs.as_slice(), row_to_post)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(posts)
    }

    /// Count published posts matching the same filters as
    /// [`Self::list_published_posts`].
    pub fn count_published_posts(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM blog_posts WHERE status = 'published'");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        push_post_filters(&mut sql, &mut params_vec, category, search);

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let count = self
            .conn
            .query_row(&sql, params_refs.as_slice(), |row| row.get(0))?;
        Ok(count)
    }

    /// List featured published posts, capped at `limit`.
    pub fn featured_published_posts(&self, limit: i64) -> Result<Vec<BlogPost>> {
        let sql = format!(
            "SELECT {} FROM blog_posts WHERE status = 'published' AND featured = 1
             ORDER BY published_at DESC, created_at DESC LIMIT ?1",
            POST_COLS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let posts = stmt
            .query_map([limit], row_to_post)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(posts)
    }

    /// List up to `limit` other published posts in the same category.
    pub fn related_published_posts(
        &self,
        category: &str,
        exclude_id: i64,
        limit: i64,
    ) -> Result<Vec<BlogPost>> {
        let sql = format!(
            "SELECT {} FROM blog_posts
             WHERE status = 'published' AND category = ?1 AND id != ?2
             ORDER BY published_at DESC, created_at DESC LIMIT ?3",
            POST_COLS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let posts = stmt
            .query_map(params![category, exclude_id, limit], row_to_post)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(posts)
    }

    /// Distinct category values across published posts, for filter controls.
    pub fn published_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT category FROM blog_posts WHERE status = 'published'
             ORDER BY category ASC",
        )?;
        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }

    /// Publish the post with the given slug.
    ///
    /// Sets `published_at` to now unless the post already carries one, so
    /// re-publishing does not reshuffle the listing order.
    pub fn publish_post(&mut self, slug: &str) -> Result<BlogPost> {
        let now = Utc::now();
        let updated = self.conn.execute(
            "UPDATE blog_posts
             SET status = 'published',
                 published_at = COALESCE(published_at, ?1),
                 updated_at = ?1
             WHERE slug = ?2",
            params![now, slug],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Blog post not found: {}", slug)));
        }
        self.get_post_by_slug(slug)
    }

    // === Service Operations ===

    /// Add a new service, assigning its database id.
    pub fn add_service(&mut self, service: &mut Service) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO services
            (title, slug, description, short_description, price_range, pricing_type,
             features, icon_class, active, display_order, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                service.title,
                service.slug,
                service.description,
                service.short_description,
                service.price_range,
                service.pricing_type,
                service.features,
                service.icon_class,
                service.active,
                service.display_order,
                service.created_at,
            ],
        )?;
        service.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// List active services, optionally filtered by a case-insensitive
    /// substring search over title and description. Pass a negative
    /// `limit` for no limit.
    pub fn list_active_services(&self, search: Option<&str>, limit: i64) -> Result<Vec<Service>> {
        let mut sql = format!("SELECT {} FROM services WHERE active = 1", SERVICE_COLS);
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        push_service_filters(&mut sql, &mut params_vec, search);

        sql.push_str(" ORDER BY display_order ASC, title ASC LIMIT ?");
        params_vec.push(Box::new(limit));

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let services = stmt
            .query_map(params_refs.as_slice(), row_to_service)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(services)
    }

    /// Count active services matching the same filter as
    /// [`Self::list_active_services`].
    pub fn count_active_services(&self, search: Option<&str>) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM services WHERE active = 1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        push_service_filters(&mut sql, &mut params_vec, search);

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let count = self
            .conn
            .query_row(&sql, params_refs.as_slice(), |row| row.get(0))?;
        Ok(count)
    }

    // === Testimonial Operations ===

    /// Add a new testimonial, assigning its database id.
    pub fn add_testimonial(&mut self, testimonial: &mut Testimonial) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO testimonials
            (client_name, client_position, client_company, client_photo, quote,
             rating, project_id, active, featured, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                testimonial.client_name,
                testimonial.client_position,
                testimonial.client_company,
                testimonial.client_photo,
                testimonial.quote,
                testimonial.rating,
                testimonial.project_id,
                testimonial.active,
                testimonial.featured,
                testimonial.created_at,
            ],
        )?;
        testimonial.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// List active testimonials, optionally only featured ones, capped at
    /// `limit` (negative for no limit).
    pub fn list_testimonials(&self, featured_only: bool, limit: i64) -> Result<Vec<Testimonial>> {
        let mut sql = format!("SELECT {} FROM testimonials WHERE active = 1", TESTIMONIAL_COLS);
        if featured_only {
            sql.push_str(" AND featured = 1");
        }
        sql.push_str(" ORDER BY featured DESC, created_at DESC LIMIT ?1");

        let mut stmt = self.conn.prepare(&sql)?;
        let testimonials = stmt
            .query_map([limit], row_to_testimonial)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(testimonials)
    }

    // === Skill Operations ===

    /// Add a new skill, assigning its database id.
    pub fn add_skill(&mut self, skill: &mut Skill) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO skills
            (name, category, proficiency, icon_class, show_on_home, display_order)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                skill.name,
                skill.category.as_str(),
                skill.proficiency,
                skill.icon_class,
                skill.show_on_home,
                skill.display_order,
            ],
        )?;
        skill.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// List skills, optionally only those flagged for the home page.
    pub fn list_skills(&self, home_only: bool) -> Result<Vec<Skill>> {
        let mut sql = format!("SELECT {} FROM skills", SKILL_COLS);
        if home_only {
            sql.push_str(" WHERE show_on_home = 1");
        }
        sql.push_str(" ORDER BY category ASC, display_order ASC, name ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let skills = stmt
            .query_map([], row_to_skill)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(skills)
    }

    // === Contact Message Operations ===

    /// Add a new contact message, assigning its database id.
    pub fn add_contact_message(&mut self, message: &mut ContactMessage) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO contact_messages
            (name, email, phone, subject, message, status, created_at, read_at, replied_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                message.name,
                message.email,
                message.phone,
                message.subject,
                message.message,
                message.status.as_str(),
                message.created_at,
                message.read_at,
                message.replied_at,
            ],
        )?;
        message.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// Get a contact message by id.
    pub fn get_contact_message(&self, id: i64) -> Result<ContactMessage> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM contact_messages WHERE id = ?1", MESSAGE_COLS),
                [id],
                row_to_message,
            )
            .map_err(|e| not_found(e, format!("Contact message not found: {}", id)))
    }

    /// List contact messages, newest first, optionally filtered by status.
    pub fn list_contact_messages(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>> {
        let mut sql = format!("SELECT {} FROM contact_messages WHERE 1=1", MESSAGE_COLS);
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(s) = status {
            sql.push_str(" AND status = ?");
            params_vec.push(Box::new(s.as_str().to_string()));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let messages = stmt
            .query_map(params_refs.as_slice(), row_to_message)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(messages)
    }

    /// Mark a message as read.
    ///
    /// Only transitions messages still in `new`; `read_at` is set exactly
    /// once, at the transition. Already-read and replied messages are left
    /// untouched.
    pub fn mark_message_read(&mut self, id: i64) -> Result<ContactMessage> {
        self.get_contact_message(id)?;
        self.conn.execute(
            "UPDATE contact_messages SET status = 'read', read_at = ?1
             WHERE id = ?2 AND status = 'new'",
            params![Utc::now(), id],
        )?;
        self.get_contact_message(id)
    }

    /// Mark a message as replied.
    ///
    /// Transitions forward from `new` or `read`; `replied_at` is set exactly
    /// once, at the transition.
    pub fn mark_message_replied(&mut self, id: i64) -> Result<ContactMessage> {
        self.get_contact_message(id)?;
        self.conn.execute(
            "UPDATE contact_messages SET status = 'replied', replied_at = ?1
             WHERE id = ?2 AND status != 'replied'",
            params![Utc::now(), id],
        )?;
        self.get_contact_message(id)
    }
}

// === Filter helpers ===

fn push_project_filters(
    sql: &mut String,
    params_vec: &mut Vec<Box<dyn rusqlite::ToSql>>,
    category: Option<ProjectCategory>,
    search: Option<&str>,
) {
    if let Some(c) = category {
        sql.push_str(" AND category = ?");
        params_vec.push(Box::new(c.as_str().to_string()));
    }
    if let Some(term) = search {
        sql.push_str(
            r" AND (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\' OR technologies LIKE ? ESCAPE '\')",
        );
        let pattern = like_pattern(term);
        params_vec.push(Box::new(pattern.clone()));
        params_vec.push(Box::new(pattern.clone()));
        params_vec.push(Box::new(pattern));
    }
}

fn push_post_filters(
    sql: &mut String,
    params_vec: &mut Vec<Box<dyn rusqlite::ToSql>>,
    category: Option<&str>,
    search: Option<&str>,
) {
    if let Some(c) = category {
        sql.push_str(" AND category = ?");
        params_vec.push(Box::new(c.to_string()));
    }
    if let Some(term) = search {
        sql.push_str(
            r" AND (title LIKE ? ESCAPE '\' OR content LIKE ? ESCAPE '\' OR tags LIKE ? ESCAPE '\')",
        );
        let pattern = like_pattern(term);
        params_vec.push(Box::new(pattern.clone()));
        params_vec.push(Box::new(pattern.clone()));
        params_vec.push(Box::new(pattern));
    }
}

fn push_service_filters(
    sql: &mut String,
    params_vec: &mut Vec<Box<dyn rusqlite::ToSql>>,
    search: Option<&str>,
) {
    if let Some(term) = search {
        sql.push_str(r" AND (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')");
        let pattern = like_pattern(term);
        params_vec.push(Box::new(pattern.clone()));
        params_vec.push(Box::new(pattern));
    }
}

/// Build a LIKE pattern matching the term as a literal substring.
///
/// SQLite's LIKE is case-insensitive for ASCII, which is the matching the
/// query layer promises. `%`, `_`, and `\` in user input are escaped so
/// they match literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Map a query_row error so a missing row reads as NotFound instead of a
/// bare database error.
fn not_found(e: rusqlite::Error, msg: String) -> Error {
    match e {
        rusqlite::Error::QueryReturnedNoRows => Error::NotFound(msg),
        other => Error::Database(other),
    }
}

// === Row mappers ===

fn parse_variant<T>(idx: usize, value: String) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e.into())
    })
}

fn row_to_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        short_description: row.get(4)?,
        category: parse_variant(5, row.get::<_, String>(5)?)?,
        technologies: row.get(6)?,
        github_url: row.get(7)?,
        live_url: row.get(8)?,
        demo_video: row.get(9)?,
        thumbnail: row.get(10)?,
        image1: row.get(11)?,
        image2: row.get(12)?,
        image3: row.get(13)?,
        featured: row.get(14)?,
        display_order: row.get(15)?,
        created_at: row.get(16)?,
        updated_at: row.get(17)?,
    })
}

fn row_to_post(row: &Row<'_>) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        author: row.get(3)?,
        excerpt: row.get(4)?,
        content: row.get(5)?,
        featured_image: row.get(6)?,
        category: row.get(7)?,
        tags: row.get(8)?,
        status: parse_variant::<PostStatus>(9, row.get::<_, String>(9)?)?,
        featured: row.get(10)?,
        read_time: row.get(11)?,
        views: row.get(12)?,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
        published_at: row.get(15)?,
    })
}

fn row_to_service(row: &Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        short_description: row.get(4)?,
        price_range: row.get(5)?,
        pricing_type: row.get(6)?,
        features: row.get(7)?,
        icon_class: row.get(8)?,
        active: row.get(9)?,
        display_order: row.get(10)?,
        created_at: row.get(11)?,
    })
}

fn row_to_testimonial(row: &Row<'_>) -> rusqlite::Result<Testimonial> {
    Ok(Testimonial {
        id: row.get(0)?,
        client_name: row.get(1)?,
        client_position: row.get(2)?,
        client_company: row.get(3)?,
        client_photo: row.get(4)?,
        quote: row.get(5)?,
        rating: row.get(6)?,
        project_id: row.get(7)?,
        active: row.get(8)?,
        featured: row.get(9)?,
        created_at: row.get(10)?,
    })
}

fn row_to_skill(row: &Row<'_>) -> rusqlite::Result<Skill> {
    Ok(Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        category: parse_variant::<SkillCategory>(2, row.get::<_, String>(2)?)?,
        proficiency: row.get(3)?,
        icon_class: row.get(4)?,
        show_on_home: row.get(5)?,
        display_order: row.get(6)?,
    })
}

fn row_to_message(row: &Row<'_>) -> rusqlite::Result<ContactMessage> {
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        subject: row.get(4)?,
        message: row.get(5)?,
        status: parse_variant::<MessageStatus>(6, row.get::<_, String>(6)?)?,
        created_at: row.get(7)?,
        read_at: row.get(8)?,
        replied_at: row.get(9)?,
    })
}

/// Resolve the data directory: `FOLIO_DATA_DIR` env var, falling back to
/// the platform data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("FOLIO_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))?;
    Ok(data_dir.join("folio"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::init_at(temp_dir.path()).unwrap();
        (temp_dir, storage)
    }

    fn sample_project(slug: &str, category: ProjectCategory) -> Project {
        let mut project = Project::new(
            format!("Project {}", slug),
            slug.to_string(),
            "A demo project".to_string(),
        );
        project.category = category;
        project
    }

    fn published_post(slug: &str, category: &str) -> BlogPost {
        let mut post = BlogPost::new(format!("Post {}", slug), slug.to_string(), "ada".to_string());
        post.category = category.to_string();
        post.status = PostStatus::Published;
        post.published_at = Some(Utc::now());
        post
    }

    #[test]
    fn test_storage_init_and_exists() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!Storage::exists_at(temp_dir.path()));

        Storage::init_at(temp_dir.path()).unwrap();
        assert!(Storage::exists_at(temp_dir.path()));
    }

    #[test]
    fn test_open_uninitialized_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            Storage::open_at(temp_dir.path()),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_add_and_get_project_by_slug() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut project = sample_project("site", ProjectCategory::Web);
        storage.add_project(&mut project).unwrap();
        assert!(project.id > 0);

        let retrieved = storage.get_project_by_slug("site").unwrap();
        assert_eq!(retrieved.id, project.id);
        assert_eq!(retrieved.category, ProjectCategory::Web);
    }

    #[test]
    fn test_get_project_unknown_slug_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(matches!(
            storage.get_project_by_slug("nope"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut first = sample_project("site", ProjectCategory::Web);
        storage.add_project(&mut first).unwrap();

        let mut second = sample_project("site", ProjectCategory::Mobile);
        assert!(storage.add_project(&mut second).is_err());
    }

    #[test]
    fn test_project_ordering_featured_then_order_then_newest() {
        let (_temp_dir, mut storage) = create_test_storage();
        let base = Utc::now();

        let mut plain = sample_project("plain", ProjectCategory::Web);
        plain.created_at = base - Duration::days(3);
        storage.add_project(&mut plain).unwrap();

        let mut featured_late = sample_project("featured-late", ProjectCategory::Web);
        featured_late.featured = true;
        featured_late.display_order = 2;
        featured_late.created_at = base - Duration::days(1);
        storage.add_project(&mut featured_late).unwrap();

        let mut featured_first = sample_project("featured-first", ProjectCategory::Web);
        featured_first.featured = true;
        featured_first.display_order = 1;
        featured_first.created_at = base - Duration::days(2);
        storage.add_project(&mut featured_first).unwrap();

        let all = storage.list_projects(None, None, -1, 0).unwrap();
        let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["featured-first", "featured-late", "plain"]);
    }

    #[test]
    fn test_list_projects_category_and_search_combine() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut mobile = sample_project("app", ProjectCategory::Mobile);
        mobile.technologies = "React Native, Firebase".to_string();
        storage.add_project(&mut mobile).unwrap();

        let mut web = sample_project("dashboard", ProjectCategory::Web);
        web.technologies = "React, Axum".to_string();
        storage.add_project(&mut web).unwrap();

        // Category AND search must both hold
        let hits = storage
            .list_projects(Some(ProjectCategory::Mobile), Some("react"), -1, 0)
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "app");

        // Search alone matches both (case-insensitive)
        assert_eq!(storage.count_projects(None, Some("REACT")).unwrap(), 2);
    }

    #[test]
    fn test_search_wildcards_match_literally() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut project = sample_project("pct", ProjectCategory::Web);
        project.description = "Improved throughput by 100%".to_string();
        storage.add_project(&mut project).unwrap();

        assert_eq!(storage.count_projects(None, Some("100%")).unwrap(), 1);
        // A bare wildcard is not a match-all
        assert_eq!(storage.count_projects(None, Some("%zzz%")).unwrap(), 0);
    }

    #[test]
    fn test_list_projects_limit_offset() {
        let (_temp_dir, mut storage) = create_test_storage();
        for i in 0..5 {
            let mut project = sample_project(&format!("p{}", i), ProjectCategory::Web);
            project.display_order = i;
            storage.add_project(&mut project).unwrap();
        }

        let page = storage.list_projects(None, None, 2, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].slug, "p2");
        assert_eq!(page[1].slug, "p3");
    }

    #[test]
    fn test_featured_projects_cap() {
        let (_temp_dir, mut storage) = create_test_storage();
        for i in 0..4 {
            let mut project = sample_project(&format!("f{}", i), ProjectCategory::Web);
            project.featured = true;
            project.display_order = i;
            storage.add_project(&mut project).unwrap();
        }
        let mut plain = sample_project("plain", ProjectCategory::Web);
        storage.add_project(&mut plain).unwrap();

        let featured = storage.featured_projects(3).unwrap();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_related_projects_excludes_self_and_other_categories() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut a = sample_project("a", ProjectCategory::Data);
        storage.add_project(&mut a).unwrap();
        let mut b = sample_project("b", ProjectCategory::Data);
        storage.add_project(&mut b).unwrap();
        let mut c = sample_project("c", ProjectCategory::Web);
        storage.add_project(&mut c).unwrap();

        let related = storage
            .related_projects(ProjectCategory::Data, a.id, 3)
            .unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "b");
    }

    #[test]
    fn test_draft_posts_hidden_from_published_lookup() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut draft = BlogPost::new("Draft".into(), "draft".into(), "ada".into());
        storage.add_post(&mut draft).unwrap();

        assert!(matches!(
            storage.get_published_post_by_slug("draft"),
            Err(Error::NotFound(_))
        ));
        // Administrative lookup still sees it
        assert_eq!(storage.get_post_by_slug("draft").unwrap().slug, "draft");
    }

    #[test]
    fn test_record_post_view_increments_each_call() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut post = published_post("hello", "Tutorial");
        storage.add_post(&mut post).unwrap();

        let before = storage.get_published_post_by_slug("hello").unwrap().views;
        for _ in 0..3 {
            storage.record_post_view("hello").unwrap();
        }
        let after = storage.get_published_post_by_slug("hello").unwrap().views;
        assert_eq!(after, before + 3);
    }

    #[test]
    fn test_record_post_view_draft_is_not_found_and_untouched() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut draft = BlogPost::new("Draft".into(), "draft".into(), "ada".into());
        storage.add_post(&mut draft).unwrap();

        assert!(matches!(
            storage.record_post_view("draft"),
            Err(Error::NotFound(_))
        ));
        assert_eq!(storage.get_post_by_slug("draft").unwrap().views, 0);
    }

    #[test]
    fn test_published_post_ordering_newest_first() {
        let (_temp_dir, mut storage) = create_test_storage();
        let base = Utc::now();

        let mut old = published_post("old", "Tutorial");
        old.published_at = Some(base - Duration::days(2));
        storage.add_post(&mut old).unwrap();

        let mut new = published_post("new", "Tutorial");
        new.published_at = Some(base - Duration::days(1));
        storage.add_post(&mut new).unwrap();

        let posts = storage.list_published_posts(None, None, -1, 0).unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[test]
    fn test_published_categories_distinct_and_published_only() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut a = published_post("a", "Tutorial");
        storage.add_post(&mut a).unwrap();
        let mut b = published_post("b", "Tutorial");
        storage.add_post(&mut b).unwrap();
        let mut c = published_post("c", "Career");
        storage.add_post(&mut c).unwrap();
        let mut draft = BlogPost::new("D".into(), "d".into(), "ada".into());
        draft.category = "Hidden".to_string();
        storage.add_post(&mut draft).unwrap();

        let categories = storage.published_categories().unwrap();
        assert_eq!(categories, vec!["Career", "Tutorial"]);
    }

    #[test]
    fn test_publish_post_sets_published_at_once() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut draft = BlogPost::new("Draft".into(), "draft".into(), "ada".into());
        storage.add_post(&mut draft).unwrap();

        let published = storage.publish_post("draft").unwrap();
        assert_eq!(published.status, PostStatus::Published);
        let first_published_at = published.published_at.unwrap();

        // Publishing again keeps the original timestamp
        let republished = storage.publish_post("draft").unwrap();
        assert_eq!(republished.published_at.unwrap(), first_published_at);
    }

    #[test]
    fn test_active_services_ordering_and_filter() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut b = Service::new("Backend Development".into(), "backend".into(), "APIs".into());
        b.display_order = 1;
        storage.add_service(&mut b).unwrap();

        let mut a = Service::new("App Development".into(), "apps".into(), "Mobile apps".into());
        a.display_order = 1;
        storage.add_service(&mut a).unwrap();

        let mut inactive = Service::new("Old".into(), "old".into(), "Retired".into());
        inactive.active = false;
        storage.add_service(&mut inactive).unwrap();

        let services = storage.list_active_services(None, -1).unwrap();
        let titles: Vec<&str> = services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["App Development", "Backend Development"]);

        assert_eq!(storage.count_active_services(Some("api")).unwrap(), 1);
    }

    #[test]
    fn test_testimonials_featured_filter_and_cap() {
        let (_temp_dir, mut storage) = create_test_storage();

        for i in 0..4 {
            let mut t = Testimonial::new(format!("Client {}", i), "Great".into());
            t.featured = true;
            storage.add_testimonial(&mut t).unwrap();
        }
        let mut unfeatured = Testimonial::new("Quiet".into(), "Fine".into());
        storage.add_testimonial(&mut unfeatured).unwrap();
        let mut inactive = Testimonial::new("Gone".into(), "Hidden".into());
        inactive.active = false;
        inactive.featured = true;
        storage.add_testimonial(&mut inactive).unwrap();

        let featured = storage.list_testimonials(true, 3).unwrap();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|t| t.featured && t.active));

        let all_active = storage.list_testimonials(false, -1).unwrap();
        assert_eq!(all_active.len(), 5);
    }

    #[test]
    fn test_skills_home_filter_and_ordering() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut rust = Skill::new("Rust".into(), SkillCategory::Language);
        storage.add_skill(&mut rust).unwrap();
        let mut sql = Skill::new("SQLite".into(), SkillCategory::Database);
        sql.show_on_home = false;
        storage.add_skill(&mut sql).unwrap();

        let home = storage.list_skills(true).unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].name, "Rust");

        let all = storage.list_skills(false).unwrap();
        assert_eq!(all.len(), 2);
        // category ordering: database before language
        assert_eq!(all[0].name, "SQLite");
    }

    #[test]
    fn test_contact_message_lifecycle() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut msg = ContactMessage::new(
            "Ada".into(),
            "ada@example.com".into(),
            "Hi".into(),
            "Hello there".into(),
        );
        storage.add_contact_message(&mut msg).unwrap();
        assert!(msg.id > 0);

        let read = storage.mark_message_read(msg.id).unwrap();
        assert_eq!(read.status, MessageStatus::Read);
        let read_at = read.read_at.unwrap();

        // Marking read again does not move read_at
        let read_again = storage.mark_message_read(msg.id).unwrap();
        assert_eq!(read_again.read_at.unwrap(), read_at);

        let replied = storage.mark_message_replied(msg.id).unwrap();
        assert_eq!(replied.status, MessageStatus::Replied);
        assert!(replied.replied_at.is_some());
        assert_eq!(replied.read_at.unwrap(), read_at);

        // Replied is terminal
        let replied_at = replied.replied_at.unwrap();
        let still = storage.mark_message_replied(msg.id).unwrap();
        assert_eq!(still.replied_at.unwrap(), replied_at);
    }

    #[test]
    fn test_mark_missing_message_is_not_found() {
        let (_temp_dir, mut storage) = create_test_storage();
        assert!(matches!(
            storage.mark_message_read(42),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_list_contact_messages_by_status() {
        let (_temp_dir, mut storage) = create_test_storage();

        let mut first = ContactMessage::new("A".into(), "a@x.com".into(), "S".into(), "M".into());
        storage.add_contact_message(&mut first).unwrap();
        let mut second = ContactMessage::new("B".into(), "b@x.com".into(), "S".into(), "M".into());
        storage.add_contact_message(&mut second).unwrap();
        storage.mark_message_read(second.id).unwrap();

        let unread = storage
            .list_contact_messages(Some(MessageStatus::New))
            .unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, first.id);

        let all = storage.list_contact_messages(None).unwrap();
        assert_eq!(all.len(), 2);
    }
}
