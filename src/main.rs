use tokio::signal;

use dotenvy::dotenv;

use portfolio_contact_api::app::create_app;
use portfolio_contact_api::config::AppConfig;
use portfolio_contact_api::email::SmtpMailer;
use portfolio_contact_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = AppConfig::from_env()?;

  let mailer = SmtpMailer::new(config.smtp.clone())?;
  let app_state = SharedAppState::new(mailer, config.owner_email.clone());
  let app = create_app(app_state, &config.static_dir);

  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

  println!("Server is running on port {}", config.port);
  println!("Visit http://localhost:{} to view the portfolio", config.port);

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
