use order_api::clients::OrderClient;
use order_api::framework::mock::MockClient;
use order_api::framework::{FrameworkError, ResourceActor};
use order_api::model::{Dish, Order, OrderId, OrderPayload, OrderStatus};
use order_api::order_actor::{self, OrderError};
use serde_json::json;

fn payload(data: serde_json::Value) -> OrderPayload {
    serde_json::from_value(data).unwrap()
}

fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: OrderId::from(id),
        deliver_to: "1 Main St".into(),
        mobile_number: "555-0100".into(),
        status,
        dishes: vec![Dish::new(1)
            .with("id", "soup")
            .with("name", "Soup")
            .with("description", "Tomato")
            .with("price", 4.5)],
    }
}

fn valid_update(id: &str, status: &str) -> OrderPayload {
    payload(json!({
        "id": id,
        "deliverTo": "2 Side St",
        "mobileNumber": "555-0111",
        "status": status,
        "dishes": [{ "name": "Bread", "quantity": 4 }]
    }))
}

/// Pattern 1: real Order actor, driven through the order client.
/// Validation and state rules run inside the actor's hooks.
#[tokio::test]
async fn test_order_actor_enforces_rules() {
    let (actor, generic_client) = order_actor::new(8);
    let client = OrderClient::new(generic_client);
    tokio::spawn(
        actor
            .with_entities([
                order("pending", OrderStatus::Pending),
                order("done", OrderStatus::Delivered),
            ])
            .run(()),
    );

    let missing = client
        .create_order(payload(json!({ "mobileNumber": "x", "dishes": [{ "quantity": 1 }] })))
        .await;
    assert_eq!(missing, Err(OrderError::MissingField("deliverTo")));

    let bad_quantity = client
        .create_order(payload(json!({
            "deliverTo": "x",
            "mobileNumber": "y",
            "dishes": [{ "quantity": 2 }, { "quantity": 0 }, { "quantity": -1 }]
        })))
        .await;
    assert_eq!(bad_quantity, Err(OrderError::InvalidQuantity(1)));
    assert_eq!(client.list_orders().await.unwrap().len(), 2);

    assert_eq!(
        client
            .update_order(OrderId::from("done"), valid_update("done", "pending"))
            .await,
        Err(OrderError::Delivered)
    );
    assert_eq!(
        client
            .update_order(OrderId::from("pending"), valid_update("other", "pending"))
            .await,
        Err(OrderError::IdMismatch {
            body: "other".into(),
            route: "pending".into()
        })
    );
    assert_eq!(
        client
            .update_order(OrderId::from("missing"), valid_update("missing", "pending"))
            .await,
        Err(OrderError::NotFound("missing".into()))
    );

    // Rejected updates leave the stored order as it was.
    let untouched = client.find_order(OrderId::from("pending")).await.unwrap();
    assert_eq!(untouched, order("pending", OrderStatus::Pending));

    let updated = client
        .update_order(OrderId::from("pending"), valid_update("pending", "preparing"))
        .await
        .unwrap();
    assert_eq!(updated.deliver_to, "2 Side St");
    assert_eq!(updated.dishes.len(), 1);
    assert_eq!(
        client.delete_order(OrderId::from("pending")).await,
        Err(OrderError::NotPending)
    );
}

/// Seeded ids are never handed out again, whatever the generator returns.
#[tokio::test]
async fn test_generator_collisions_are_retried() {
    let ids = std::sync::Mutex::new(vec!["fresh", "taken", "taken"]);
    let (actor, generic_client) = ResourceActor::<Order>::new(8, move || {
        OrderId::from(ids.lock().unwrap().pop().unwrap_or("spare"))
    });
    let client = OrderClient::new(generic_client);
    tokio::spawn(actor.with_entities([order("taken", OrderStatus::Pending)]).run(()));

    let created = client
        .create_order(payload(json!({
            "deliverTo": "x",
            "mobileNumber": "y",
            "dishes": [{ "quantity": 1 }]
        })))
        .await
        .unwrap();
    assert_eq!(created.id, OrderId::from("fresh"));
}

/// Pattern 2: mocked actor. Exercises the client's error mapping only.
#[tokio::test]
async fn test_order_client_maps_framework_errors() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_get(OrderId::from("gone")).return_ok(None);
    mock.expect_delete(OrderId::from("x"))
        .return_err(FrameworkError::NotFound("x".into()));
    mock.expect_update(OrderId::from("y"))
        .return_err(FrameworkError::EntityError(Box::new(OrderError::Delivered)));
    mock.expect_list().return_err(FrameworkError::ActorClosed);

    let client = OrderClient::new(mock.client());

    assert_eq!(
        client.find_order(OrderId::from("gone")).await,
        Err(OrderError::NotFound("gone".into()))
    );
    assert_eq!(
        client.delete_order(OrderId::from("x")).await,
        Err(OrderError::NotFound("x".into()))
    );
    assert_eq!(
        client
            .update_order(OrderId::from("y"), OrderPayload::default())
            .await,
        Err(OrderError::Delivered)
    );
    assert!(matches!(
        client.list_orders().await,
        Err(OrderError::ActorCommunication(_))
    ));

    mock.verify();
}

/// A foreign error inside `EntityError` is reported as a communication failure.
#[tokio::test]
async fn test_order_client_reports_unknown_entity_errors() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create().return_err(FrameworkError::EntityError(
        "disk on fire".to_string().into(),
    ));

    let client = OrderClient::new(mock.client());
    let result = client.create_order(OrderPayload::default()).await;
    assert_eq!(
        result,
        Err(OrderError::ActorCommunication("disk on fire".into()))
    );
    mock.verify();
}

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Debug logs name the order and the fields sent, never the values.
#[test]
fn test_debug_logs_omit_payload_values() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            let (actor, generic_client) = order_actor::new(8);
            let client = OrderClient::new(generic_client);
            tokio::spawn(actor.run(()));

            let created = client
                .create_order(payload(json!({
                    "deliverTo": "12 Secret Ln",
                    "mobileNumber": "555-867-5309",
                    "dishes": [{ "quantity": 1 }]
                })))
                .await
                .unwrap();
            client
                .update_order(
                    created.id.clone(),
                    payload(json!({
                        "deliverTo": "12 Secret Ln",
                        "mobileNumber": "555-867-5309",
                        "status": "preparing",
                        "dishes": [{ "quantity": 2 }]
                    })),
                )
                .await
                .unwrap();
        });
    });

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("create_order called"));
    assert!(output.contains("mobileNumber"));
    assert!(!output.contains("555-867-5309"));
    assert!(!output.contains("12 Secret Ln"));
}
