#[tokio::main]
async fn main() -> anyhow::Result<()> {
    medstock_observability::init();

    let addr = std::env::var("MEDSTOCK_ADDR").unwrap_or_else(|_| {
        tracing::info!("MEDSTOCK_ADDR not set; defaulting to 0.0.0.0:8000");
        "0.0.0.0:8000".to_string()
    });

    let app = medstock_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
