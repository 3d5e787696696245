#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use course_scheduler::{Scheduler, SchedulerConfig, http_api, init_logging};

    init_logging()?;
    let config = SchedulerConfig::load(None)?;
    let catalog_path = std::env::var("COURSE_SCHEDULER_CATALOG")
        .map(std::path::PathBuf::from)
        .ok()
        .or(config.catalog_path.clone())
        .ok_or("no course catalog configured (set COURSE_SCHEDULER_CATALOG or catalog_path)")?;
    let addr: SocketAddr = std::env::var("COURSE_SCHEDULER_HTTP_ADDR")
        .unwrap_or_else(|_| config.http_addr.clone())
        .parse()?;

    let mut scheduler = Scheduler::from_catalog_file(&catalog_path)?;
    scheduler.set_title(Some(&config.schedule_title))?;

    println!("course-scheduler HTTP API listening on http://{addr}");
    http_api::serve(addr, scheduler).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
