use std::env;
use std::path::PathBuf;

/// Root directory to serve: the directory containing the server executable,
/// falling back to the current working directory.
fn site_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    bella_observability::init();

    let root = site_root();
    let app = bella_site::build_app(root.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", bella_site::PORT)).await?;

    tracing::info!(
        root = %root.display(),
        "serving Chandra Bella Naturals site at http://localhost:{}/",
        bella_site::PORT
    );
    tracing::info!("press Ctrl+C to stop the server");

    axum::serve(listener, app).await?;
    Ok(())
}
