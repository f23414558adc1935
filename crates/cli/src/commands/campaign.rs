use anyhow::Result;

use super::{open_service, print_json};

pub(crate) async fn run_once(manual: bool) -> Result<()> {
    let (service, _events) = open_service().await?;
    let outcome = if manual {
        service.trigger_manual().await?
    } else {
        service.run_scheduled().await
    };
    tracing::info!(deleted = outcome.deleted(), manual, "cleanup run finished");
    print_json(&outcome)
}

pub(crate) async fn status() -> Result<()> {
    let (service, _events) = open_service().await?;
    print_json(&service.status().await?)
}

pub(crate) async fn progress() -> Result<()> {
    let (service, _events) = open_service().await?;
    print_json(&service.progress().await?)
}

pub(crate) async fn set_enabled(enabled: bool) -> Result<()> {
    let (service, _events) = open_service().await?;
    service.set_enabled(enabled).await?;
    println!("auto clean {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

pub(crate) async fn install() -> Result<()> {
    let (service, _events) = open_service().await?;
    service.install().await?;
    // the recurring event belongs to `serve`; this process exits right away
    service.uninstall();
    println!("settings initialised");
    Ok(())
}
