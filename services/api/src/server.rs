use crate::cli::ServeArgs;
use crate::infra::{AppState, LoggingMailTransport, RelayMailTransport};
use crate::routes::with_rsvp_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};
use wedding_rsvp::config::AppConfig;
use wedding_rsvp::error::AppError;
use wedding_rsvp::rsvp::{GuestRoster, MailTransport, RsvpService};
use wedding_rsvp::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let roster = Arc::new(GuestRoster::load(&config.roster.path)?);
    if roster.is_empty() {
        warn!(path = %config.roster.path.display(), "guest roster is empty; every rsvp will take the unlisted branch");
    }
    info!(guests = roster.len(), path = %config.roster.path.display(), "guest roster loaded");

    match config.mail.relay_url.clone() {
        Some(endpoint) => {
            let transport = RelayMailTransport::new(endpoint, config.mail.relay_token.clone());
            serve(config, roster, transport).await
        }
        None => {
            warn!("MAIL_RELAY_URL not set; outbound email will be logged, not delivered");
            serve(config, roster, LoggingMailTransport).await
        }
    }
}

async fn serve<M>(config: AppConfig, roster: Arc<GuestRoster>, transport: M) -> Result<(), AppError>
where
    M: MailTransport + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(RsvpService::new(
        roster,
        Arc::new(transport),
        &config.mail,
        config.event.clone(),
    ));

    let app = with_rsvp_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, event = %config.event.couple, "wedding rsvp service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
