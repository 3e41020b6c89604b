#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure_api, run};

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};

    use crate::models::config::ServerConfig;
    use crate::repository::{CsvUserRepository, StaticTokenStore, UserReader};
    use crate::routes::api::api_v1_users;

    /// Registers the search endpoint under `/api`.
    pub fn configure_api(cfg: &mut web::ServiceConfig) {
        cfg.service(web::scope("/api").service(api_v1_users));
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = CsvUserRepository::new(&server_config.dataset_path);
        let tokens = StaticTokenStore::new(server_config.access_tokens.iter().cloned());

        // The dataset is read per request; a broken file is reported but does
        // not stop the server from answering with 500s.
        match repo.list_users() {
            Ok(users) => log::info!(
                "Dataset {} holds {} users",
                repo.path().display(),
                users.len()
            ),
            Err(e) => log::warn!("Dataset is not readable yet: {e}"),
        }

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .configure(configure_api)
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(tokens.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
