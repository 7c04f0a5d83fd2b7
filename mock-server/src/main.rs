use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // PORT=0 picks a free port; the printed address reports the real one.
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    println!("echo server listening on http://{}", listener.local_addr()?);
    mock_server::run(listener).await
}
