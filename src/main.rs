#[tokio::main]
async fn main() {
    feedback_service::start_server().await;
}
