//! Bookmarks Module
//!
//! A self-contained CRUD module for bookmark records: a saved link with a
//! name, url, optional description, and a 1-5 rating.
//!
//! # Features
//!
//! - Payload validation with first-violated-rule error reporting
//! - Ready-to-use HTTP handlers and routes
//! - Database migrations included
//!
//! # Usage
//!
//! ```rust,ignore
//! use signet::bookmarks;
//!
//! // Get the migrations to run
//! for (name, sql) in bookmarks::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes
//! let app = Router::new()
//!     .nest("/bookmarks", bookmarks::routes())
//!     .with_state(app_state);
//!
//! // Use the store directly
//! let store = bookmarks::Bookmarks::new(connection);
//! let bookmark = store.create(input).await?;
//! ```

mod handler;
mod lib;
mod routes;
mod validate;

pub use lib::*;

pub use routes::routes;

pub use validate::validate;

/// Returns the migrations for the bookmarks module.
///
/// These should be run during application startup to ensure the database
/// schema is up to date.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
