// backend/services/promotions/watcher/src/main.rs

use promotions::infrastructure::bootstrap::run_promotion_watcher;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_promotion_watcher().await
}
