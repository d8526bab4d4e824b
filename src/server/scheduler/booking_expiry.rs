use std::time::Duration;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::booking::BookingRepository, error::AppError};

/// Starts the stale booking sweeper.
///
/// Every `interval` the sweeper moves bookings that have been `pending` for longer than
/// `stale_after` to `expired`. Bookings that have left `pending` are never touched.
///
/// # Arguments
/// - `db`: Database connection
/// - `interval`: Time between sweeps
/// - `stale_after`: Age after which a pending booking is abandoned
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; shut it down when the server stops
/// - `Err(AppError::SchedulerErr)` - Failed to create, register or start the job
pub async fn start_scheduler(
    db: DatabaseConnection,
    interval: Duration,
    stale_after: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = expire_stale_bookings(&db, stale_after).await {
                tracing::error!("Error expiring stale bookings: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        interval_secs = interval.as_secs(),
        stale_after_secs = stale_after.as_secs(),
        "Booking expiry scheduler started"
    );

    Ok(scheduler)
}

/// Runs one sweep, returning the number of bookings expired.
pub async fn expire_stale_bookings(
    db: &DatabaseConnection,
    stale_after: Duration,
) -> Result<u64, AppError> {
    let stale_after = chrono::Duration::from_std(stale_after)
        .map_err(|e| AppError::InternalError(format!("Invalid staleness threshold: {}", e)))?;
    let cutoff = Utc::now() - stale_after;

    let rows = BookingRepository::new(db).expire_stale(cutoff).await?;

    if rows > 0 {
        tracing::info!(rows, "Expired stale pending bookings");
    } else {
        tracing::debug!("No stale pending bookings to expire");
    }

    Ok(rows)
}
