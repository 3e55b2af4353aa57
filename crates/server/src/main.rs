use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, Query, Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use catalog::{Catalog, LocaleStore};
use gallery_api::{
    all_designs_page, gallery_page, request::GalleryRequest, static_page, ApiContext,
    RandomVariants, SiteOptions,
};
use serde::Deserialize;
use shared::error::{ApiError, ErrorCode};
use tower::ServiceExt;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, validate_settings, Settings};

#[derive(Debug, Deserialize)]
struct GalleryQuery {
    css: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    pg: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = load_settings();
    validate_settings(&settings).context("invalid settings")?;

    let api = build_context(&settings).map_err(|error| {
        error!(
            catalog = %settings.catalog_path.display(),
            %error,
            "failed to load gallery data; verify the catalog path and its JSON"
        );
        error
    })?;
    let designs = api.catalog.len();
    let languages = api.locales.languages().len();

    let state = AppState {
        static_files: ServeDir::new(&settings.site_root),
        api,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address {}", settings.server_bind))?;
    info!(
        %addr,
        designs,
        languages,
        site_root = %settings.site_root.display(),
        "gallery listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_context(settings: &Settings) -> anyhow::Result<ApiContext> {
    let catalog = Catalog::load(&settings.catalog_path)?;
    let locales = LocaleStore::load(&settings.locales_dir)
        .with_context(|| format!("loading locales from {}", settings.locales_dir.display()))?;
    Ok(ApiContext {
        catalog,
        locales,
        site: Arc::new(SiteOptions {
            site_root: settings.site_root.clone(),
            default_design: settings.default_design.clone(),
            nav_page_size: settings.nav_page_size,
            browser_page_size: settings.browser_page_size,
            ..SiteOptions::default()
        }),
    })
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/pages/*name", get(pages))
        .fallback(static_or_gallery)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn pages(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Option<Query<PagesQuery>>,
    request: Request,
) -> Response {
    if matches!(name.as_str(), "alldesigns" | "alldesigns/" | "alldesigns.html") {
        let pg = query.as_ref().and_then(|Query(q)| q.pg.as_deref());
        return Html(all_designs_page(&state.api, pg, &mut RandomVariants)).into_response();
    }

    if let Some(served) = serve_static(&state, request).await {
        return served;
    }

    match static_page(&state.api, &name) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            debug!(page = %name, message = %error.message, "static page not served");
            error_response(error)
        }
    }
}

/// Files under the site root win; anything the file service cannot find is
/// routed as a gallery path.
async fn static_or_gallery(
    State(state): State<Arc<AppState>>,
    query: Option<Query<GalleryQuery>>,
    request: Request,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return error_response(ApiError::not_found("Page not found"));
    }

    let path = request.uri().path().to_owned();
    if let Some(served) = serve_static(&state, request).await {
        return served;
    }

    // `/pages/` has no page name and is never a design.
    if path.trim_end_matches('/') == "/pages" {
        debug!(%path, "no page named");
        return error_response(ApiError::not_found("Page not found"));
    }

    match GalleryRequest::from_path(&path) {
        Some(gallery) => {
            let css = query.as_ref().and_then(|Query(q)| q.css.as_deref());
            Html(gallery_page(&state.api, &gallery, css)).into_response()
        }
        None => {
            debug!(%path, "no route for path");
            error_response(ApiError::not_found("Page not found"))
        }
    }
}

/// `None` when the site root has nothing at the request path.
async fn serve_static(state: &AppState, request: Request) -> Option<Response> {
    let served = match state.static_files.clone().oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    (served.status() != StatusCode::NOT_FOUND).then(|| served.into_response())
}

fn error_response(error: ApiError) -> Response {
    let status = match error.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.message).into_response()
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
