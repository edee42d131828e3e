use super::*;
use crate::orders::log::MemoryOrderLog;
use shared::models::{FixedRecipe, Ingredient};
use std::sync::Arc;
use uuid::Uuid;

fn create_test_manager() -> OrdersManager {
    OrdersManager::new(Arc::new(MemoryOrderLog::new()))
}

fn manager_with_log() -> (OrdersManager, Arc<MemoryOrderLog>) {
    let log = Arc::new(MemoryOrderLog::new());
    let manager = OrdersManager::new(log.clone());
    (manager, log)
}

/// Route tracing output to the test writer; honors RUST_LOG
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ========================================================================
// Helper: create an order and attach a finished custom pancake
// ========================================================================

fn order_with_custom(manager: &OrdersManager, ingredients: &[Ingredient]) -> Uuid {
    let order = manager.create_order(10, 5);
    manager.create_custom(order.id).unwrap();
    for ingredient in ingredients {
        manager.add_ingredient(order.id, *ingredient).unwrap();
    }
    manager.finish_custom(order.id).unwrap();
    order.id
}

const DARK_CHOCOLATE_DESC: &str = "Delicious pancake with dark chocolate!";
const MILK_CHOCOLATE_HAZELNUTS_DESC: &str = "Delicious pancake with milk chocolate, hazelnuts!";
