use order_api::clients::actor_client::ActorClient;
use order_api::lifecycle::OrderSystem;
use order_api::model::{Dish, Order, OrderId, OrderPayload, OrderStatus};
use order_api::order_actor::OrderError;
use serde_json::json;

fn payload(data: serde_json::Value) -> OrderPayload {
    serde_json::from_value(data).unwrap()
}

fn seeded(id: &str, status: OrderStatus) -> Order {
    Order {
        id: OrderId::from(id),
        deliver_to: format!("{id} Elm St"),
        mobile_number: "555-0199".into(),
        status,
        dishes: vec![Dish::new(1)
            .with("id", "d1")
            .with("name", "Pasta")
            .with("price", 12.0)],
    }
}

/// Full end-to-end run through the system: seed, create, update, delete, shutdown.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::start(16, vec![seeded("a", OrderStatus::Pending)]);
    let client = system.order_client.clone();

    let created = client
        .create_order(payload(json!({
            "deliverTo": "9 Oak Ave",
            "mobileNumber": "555-0142",
            "dishes": [{ "id": "d2", "name": "Salad", "price": 7.5, "quantity": 2 }]
        })))
        .await
        .expect("Failed to create order");
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(created.dishes[0].quantity, 2);

    let ids: Vec<String> = client
        .list_orders()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id.to_string())
        .collect();
    assert_eq!(ids, vec!["a".to_string(), created.id.to_string()]);

    let updated = client
        .update_order(
            created.id.clone(),
            payload(json!({
                "id": created.id.as_str(),
                "deliverTo": "9 Oak Ave",
                "mobileNumber": "555-0142",
                "status": "out-for-delivery",
                "dishes": [{ "name": "Salad", "quantity": 3 }]
            })),
        )
        .await
        .expect("Failed to update order");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, OrderStatus::OutForDelivery);
    assert_eq!(client.find_order(created.id.clone()).await.unwrap(), updated);

    // No longer pending, so it stays.
    assert_eq!(
        client.delete_order(created.id.clone()).await,
        Err(OrderError::NotPending)
    );
    client.delete_order(OrderId::from("a")).await.unwrap();
    assert_eq!(client.list().await.unwrap(), vec![updated]);

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}

/// Writes are serialized by the actor: concurrent creates all land, with distinct ids.
#[tokio::test]
async fn test_concurrent_creates_are_all_stored() {
    let system = OrderSystem::start(4, Vec::new());

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let client = system.order_client.clone();
            tokio::spawn(async move {
                client
                    .create_order(payload(json!({
                        "deliverTo": format!("{i} Pine Rd"),
                        "mobileNumber": "555-0100",
                        "dishes": [{ "name": "Tea", "quantity": 1 }]
                    })))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let orders = system.order_client.list_orders().await.unwrap();
    assert_eq!(orders.len(), 20);
    let mut ids: Vec<_> = orders.iter().map(|o| o.id.to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    system.shutdown().await.unwrap();
}
