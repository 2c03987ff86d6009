#[tokio::main]
async fn main() {
    recipes::start_server().await;
}
