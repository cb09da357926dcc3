// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - Static file serving for the hydration bundle
//
// The catalog data itself is fetched by the browser from COURSE_API_URL;
// the browser learns that URL from the get_catalog_config server function.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use course_catalog::web_app::app::App as WebApp;
    use course_catalog::web_app::config::CatalogConfig;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use tracing_subscriber::EnvFilter;

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog_config = CatalogConfig::from_env();
    tracing::info!("Course service (served to browsers): {}", catalog_config.courses_url());

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(|e| {
        tracing::error!("could not read Leptos configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Server functions (catalog config for the hydrated page)
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="ru">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
            .app_data(web::Data::new(catalog_config.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
