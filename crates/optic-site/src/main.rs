//! Optic Flow Exhibition Server
//!
//! Serves the server-rendered exhibition page and the hydration bundle.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), optic_site::SiteError> {
    use axum::{routing::get, Router};
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use optic_site::app::{App, THEME_STYLESHEET};
    use optic_site::fileserv::{file_and_error_handler, theme_stylesheet};
    use optic_site::{config::SiteConfig, SiteError};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "optic_site=info,optic_core=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::default();
    let theme = config.load_theme()?;
    info!(fonts = %theme.font_stack(), "Theme loaded");
    let theme_css = theme.css_variables();

    let conf = get_configuration(None)
        .await
        .map_err(|e| SiteError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route(
            THEME_STYLESHEET,
            get(move || {
                let css = theme_css.clone();
                async move { theme_stylesheet(&css) }
            }),
        )
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Exhibition listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The client entry point is `optic_site::hydrate`.
}
