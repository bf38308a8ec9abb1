use crate::config::Settings;
use crate::directory::UserDirectory;
use crate::roster_service::RosterServiceImpl;
use crate::routes;
use actix_web::dev::Server;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

/// HTTP server wrapper owning the bound listener and the running server.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Builds the roster service, performs the startup load and binds the
    /// server.
    ///
    /// A failed startup load is logged and the server starts with an empty
    /// roster; `/users/refresh` can load it later.
    pub async fn build(settings: &Settings) -> std::io::Result<Self> {
        let directory: Arc<dyn UserDirectory> = Arc::new(RosterServiceImpl::new(settings));

        if settings.data.load_on_startup {
            match directory.refresh().await {
                Ok(summary) => info!(
                    users = summary.loaded_users,
                    skipped = summary.skipped_rows,
                    "initial users data loaded"
                ),
                Err(e) => error!(error = %e, "initial users data load failed, starting empty"),
            }
        }

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, directory)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        info!(port = self.port, "collaborators api listening");
        self.server.await
    }
}

/// Starts serving the API on `listener` with the given directory.
pub fn run(listener: TcpListener, directory: Arc<dyn UserDirectory>) -> std::io::Result<Server> {
    let directory = Data::from(directory);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .app_data(directory.clone())
            .configure(routes::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
