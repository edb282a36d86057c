#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use icicrcet::app::*;
    use icicrcet::core::EditionCatalog;
    use icicrcet::core::config::Config;
    use icicrcet::core::site::{SiteState, site_router};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load application config from environment variables
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!(
        "Config loaded: default_edition={}, log_filter={}",
        config.default_edition.as_deref().unwrap_or("<latest>"),
        config.log_filter
    );

    // Parse embedded edition content up front so bad content fails at boot
    let catalog = match EditionCatalog::embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("failed to load edition content: {}", err);
            std::process::exit(1);
        }
    };
    for edition in catalog.iter() {
        tracing::info!(
            "Loaded edition {} ({}): {} tracks, {} agenda days",
            edition.slug,
            edition.year,
            edition.tracks.tracks.len(),
            edition.agenda.days.len()
        );
    }
    let site_state = SiteState::new(&config, catalog);

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        // `/` redirect and health check
        .merge(site_router(site_state.clone()))
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    tracing::info!("listening on http://{}", &addr);
    tracing::info!("default edition: http://{}{}", &addr, site_state.default_path());

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
