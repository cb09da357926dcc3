// web_app/server_fns.rs - Leptos server function declarations
//
// Compiled for both ssr and hydrate. On the server the body runs; in the
// browser the macro generates a stub that POSTs to /api.

use leptos::prelude::*;

use crate::web_app::config::CatalogConfig;

/// Configuration the server was started with.
///
/// Looked up in the reactive context first, then in the Actix app data
/// registered by the server binary, then in the process environment.
#[cfg(feature = "ssr")]
async fn server_config() -> CatalogConfig {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;

    if let Some(config) = use_context::<CatalogConfig>() {
        return config;
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(config) = req.app_data::<Data<CatalogConfig>>() {
                return config.as_ref().clone();
            }
        }
        Err(e) => {
            tracing::debug!("no request to read catalog config from: {}", e);
        }
    }

    CatalogConfig::from_env()
}

/// Where the browser should send course-listing requests
#[server(GetCatalogConfig, "/api")]
pub async fn get_catalog_config() -> Result<CatalogConfig, ServerFnError> {
    let config = server_config().await;
    tracing::debug!("serving catalog config: {}", config.api_base_url);
    Ok(config)
}
