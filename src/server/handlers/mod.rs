pub mod quotes;

pub async fn health() -> &'static str {
    "ok"
}
