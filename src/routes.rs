use axum::{
    http::header::CACHE_CONTROL,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/dashboard", get(handlers::dashboard::dashboard_get))
        .route("/deployments", get(handlers::deployments::deployments_get))
        .route(
            "/deployments/new",
            get(handlers::new_deployment::new_deployment_get)
                .post(handlers::new_deployment::new_deployment_post),
        )
        .route("/deployments/new/validate", post(handlers::new_deployment::validate_post))
        .route("/deployments/undeploy", post(handlers::deployments::undeploy_post))
        .route(
            "/settings",
            get(handlers::settings::settings_get).post(handlers::settings::settings_post),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handlers::middleware::auth_middleware,
        ));

    // Always serve styles.css - use custom if provided, otherwise use the
    // embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let app = Router::new()
        .route("/", get(handlers::auth::root_get))
        .route("/login", get(handlers::auth::login_get).post(handlers::auth::login_post))
        .route("/signup", get(handlers::auth::signup_get).post(handlers::auth::signup_post))
        .route("/logout", post(handlers::auth::logout_post))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(axum::http::header::CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .merge(protected_routes);

    app.nest_service(
        "/static",
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=31536000, immutable"),
            ))
            .service(ServeDir::new("static")),
    )
    .with_state(state)
}
