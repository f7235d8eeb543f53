//! Home page.

use askama::Template;
use axum::response::Html;
use tracing::error;

use crate::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the static chat page.
pub async fn home() -> Result<Html<String>, AppError> {
    let page = IndexTemplate {}.render().map_err(|e| {
        error!("Failed to render index.html: {}", e);
        AppError::Internal(e.to_string())
    })?;
    Ok(Html(page))
}
