#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos::logging::log;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use parcattraction::api;
    use parcattraction::app::*;
    use parcattraction::config::ServerConfig;
    use parcattraction::db::Database;

    let server_config = ServerConfig::from_env();

    // Initialize the database
    let db = Database::new(&server_config.database_path).map_err(|e| std::io::Error::other(e.to_string()))?;
    db.create_schema().await.map_err(|e| std::io::Error::other(e.to_string()))?;
    if server_config.seed_demo_data {
        db.seed_demo_data().await.map_err(|e| std::io::Error::other(e.to_string()))?;
    }
    let db = web::Data::new(db);
    log!("[SERVER] Database ready at {}", server_config.database_path);

    // Load configuration
    let conf = get_configuration(None).await.map_err(|e| std::io::Error::other(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(db.clone())
            // JSON API consumed by the attraction list
            .service(web::scope("/api").configure(api::configure))
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // to run: `trunk serve --open --features csr`
    use parcattraction::app::*;

    parcattraction::utils::panic_hook::init();
    leptos::mount_to_body(App);
}
