#[tokio::main]
async fn main() {
    tennis_score_be::start_server().await;
}
