use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::notification::{mailer::SmtpMailer, ConfirmationNotifier},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for payment gateway calls.
///
/// Redirects are disabled so a gateway response can never send the client to another
/// host, and every request is bounded by the configured gateway timeout.
///
/// # Arguments
/// - `config` - Application configuration containing the gateway timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - The TLS backend could not be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.payu.timeout)
        .build()?;

    Ok(client)
}

/// Builds the confirmation notifier backed by the configured SMTP relay.
///
/// # Arguments
/// - `config` - Application configuration containing the SMTP settings
///
/// # Returns
/// - `Ok(ConfirmationNotifier)` - Notifier sending through the relay
/// - `Err(AppError::MailErr)` - Invalid relay host or sender address
pub fn setup_notifier(config: &Config) -> Result<ConfirmationNotifier, AppError> {
    let mailer = SmtpMailer::from_config(&config.smtp)?;

    Ok(ConfirmationNotifier::new(Arc::new(mailer)))
}
