use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use dongopet_core::domain::{common::DongoPetConfig, user::ports::UserService};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::http::server::http_server::{router, state};
use crate::args::{Args, LogArgs};

mod application;
mod args;

fn init_logger(log: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(&log.filter)
        .with_context(|| format!("invalid log filter: {}", log.filter))?;
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let config = DongoPetConfig::from(args.as_ref().clone());
    config.enforce_non_default_secrets()?;

    let app_state = state(args.clone()).await?;

    let superuser = app_state
        .service
        .ensure_first_superuser(
            config.auth.first_superuser.clone(),
            config.auth.first_superuser_password.clone(),
        )
        .await?;
    info!("superuser {} is ready", superuser.email);

    let app = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port)
        .parse()
        .context("invalid server address")?;

    match (&args.server.tls_cert_path, &args.server.tls_key_path) {
        (Some(cert), Some(key)) => {
            rustls::crypto::aws_lc_rs::default_provider()
                .install_default()
                .map_err(|_| anyhow::anyhow!("failed to install the rustls crypto provider"))?;

            let tls = RustlsConfig::from_pem_file(cert, key)
                .await
                .context("failed to load TLS certificate")?;

            info!("listening on https://{}", addr);
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await?;
        }
        _ => {
            info!("listening on http://{}", addr);
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
