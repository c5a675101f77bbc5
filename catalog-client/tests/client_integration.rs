// catalog-client/tests/client_integration.rs
// Drives CatalogClient against an in-process catalog-mock server

use std::sync::Arc;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use catalog_client::{
    ApiResponse, CONNECT_FAILED, CatalogClient, ClientConfig, ClientError, HttpClient,
    ImageStatus, ProductApi, ProductCreate, ProductQuery, ProductUpdate,
};
use catalog_mock::AppState;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_mock() -> CatalogClient {
    let base_url = serve(catalog_mock::router(Arc::new(AppState::default()))).await;
    ClientConfig::new(base_url)
        .with_timeout(5)
        .build_catalog_client()
        .unwrap()
}

fn create_payload(name: &str) -> ProductCreate {
    ProductCreate {
        product_code: "MS-250".into(),
        main_boost: 1.0,
        low_value_flag: 0.0,
        popularity: 0.0,
        product_name: name.into(),
        category_name: "Motosierras".into(),
        brand_name: "ECHO".into(),
        brand_logo: "/images/brands/echo.png".into(),
        description: "Motosierra de poda".into(),
        link: vec!["https://cdn.example.com/ms250.png".into()],
        show_in_app: true,
        new_product: true,
        discount: Some("-5%".into()),
        is_spare_part: false,
    }
}

#[tokio::test]
async fn test_create_then_get() {
    let client = spawn_mock().await;

    let created = client.create_product(&create_payload("Motosierra CS-250")).await.unwrap();
    assert_eq!(created.product_id, 1);
    assert!(created.id.is_some());
    assert!(created.created_at.is_some());

    let fetched = client.get_product(created.product_id).await.unwrap();
    assert_eq!(fetched.product_name, "Motosierra CS-250");
    assert_eq!(fetched.product_code.as_deref(), Some("MS-250"));
    assert_eq!(fetched.discount.as_deref(), Some("-5%"));
    assert_eq!(fetched.main_boost, Some(1.0));
    assert_eq!(fetched.link, vec!["https://cdn.example.com/ms250.png".to_string()]);
}

#[tokio::test]
async fn test_list_search_and_empty_result() {
    let client = spawn_mock().await;
    client.create_product(&create_payload("Motosierra CS-250")).await.unwrap();
    client.create_product(&create_payload("Sopladora PB-250")).await.unwrap();

    let all = client.list_products(&ProductQuery::default()).await.unwrap();
    assert_eq!(all.count, 2);

    let found = client
        .list_products(&ProductQuery::new("sopla", false, 100))
        .await
        .unwrap();
    assert_eq!(found.count, 1);
    assert_eq!(found.products[0].product_name, "Sopladora PB-250");

    let none = client
        .list_products(&ProductQuery::new("abc", false, 100))
        .await
        .unwrap();
    assert!(none.products.is_empty());
    assert_eq!(none.count, 0);
}

#[tokio::test]
async fn test_missing_product_surfaces_server_error() {
    let client = spawn_mock().await;

    let err = client.get_product(404).await.unwrap_err();
    assert!(!err.is_transport());
    assert_eq!(err.user_message("Failed to fetch product"), "Product not found");
}

#[tokio::test]
async fn test_create_rejects_missing_field() {
    let client = spawn_mock().await;
    let mut payload = create_payload("");
    payload.product_name.clear();

    match client.create_product(&payload).await {
        Err(ClientError::Api(Some(msg))) => {
            assert_eq!(msg, "Missing required field: product_name")
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_replaces_editable_fields() {
    let client = spawn_mock().await;
    let created = client.create_product(&create_payload("Bomba")).await.unwrap();

    let update = ProductUpdate {
        product_name: "Bomba de presión".into(),
        category_name: "Bombas de presión".into(),
        brand_name: "DUCATI".into(),
        brand_logo: "/images/brands/ducati.png".into(),
        description: "Nueva".into(),
        link: vec![],
        show_in_app: false,
        new_product: false,
        discount: None,
        is_spare_part: true,
    };
    let updated = client.update_product(created.product_id, &update).await.unwrap();

    assert_eq!(updated.product_name, "Bomba de presión");
    assert_eq!(updated.brand_name, "DUCATI");
    assert!(updated.discount.is_none());
    assert!(updated.link.is_empty());
    assert!(updated.is_spare_part);
    // read-only fields survive
    assert_eq!(updated.product_code.as_deref(), Some("MS-250"));
    assert_eq!(updated.product_id, created.product_id);
}

#[tokio::test]
async fn test_delete_hides_product() {
    let client = spawn_mock().await;
    let a = client.create_product(&create_payload("A")).await.unwrap();
    let b = client.create_product(&create_payload("B")).await.unwrap();

    client.delete_product(a.product_id).await.unwrap();

    let active = client
        .list_products(&ProductQuery::new("", true, 100))
        .await
        .unwrap();
    let ids: Vec<i64> = active.products.iter().map(|p| p.product_id).collect();
    assert_eq!(ids, vec![b.product_id]);

    let err = client.delete_product(999).await.unwrap_err();
    assert_eq!(err.user_message("Failed to delete product"), "Product not found");
}

#[tokio::test]
async fn test_unknown_endpoint_envelope() {
    let client = spawn_mock().await;
    let resp: ApiResponse<()> = client.http().get("/nope").await.unwrap();
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Endpoint not found"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientConfig::new(format!("http://{addr}"))
        .with_timeout(2)
        .build_catalog_client()
        .unwrap();
    let err = client.list_products(&ProductQuery::default()).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.user_message("Failed to fetch products"), CONNECT_FAILED);
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let app = Router::new().route(
        "/products",
        get(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
    );
    let base_url = serve(app).await;
    let client = ClientConfig::new(base_url).build_catalog_client().unwrap();

    let err = client.list_products(&ProductQuery::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_probe_image() {
    let app = Router::new()
        .route(
            "/img.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], vec![0x89u8, b'P', b'N', b'G']) }),
        )
        .route(
            "/page",
            get(|| async { ([(header::CONTENT_TYPE, "text/html")], "<html></html>") }),
        );
    let base_url = serve(app).await;
    let client = ClientConfig::new(base_url.clone()).build_catalog_client().unwrap();

    assert_eq!(
        client.probe_image(&format!("{base_url}/img.png")).await,
        ImageStatus::Loaded
    );
    assert_eq!(client.probe_image("/page").await, ImageStatus::Placeholder);
    assert_eq!(client.probe_image("/missing.png").await, ImageStatus::Placeholder);
    assert_eq!(
        client.probe_image("http://127.0.0.1:1/unreachable.png").await,
        ImageStatus::Placeholder
    );
}

#[tokio::test]
async fn test_hung_request_waits_without_timeout() {
    // Accept connections but never answer
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = ClientConfig::new(format!("http://{addr}"))
        .build_catalog_client()
        .unwrap();
    let pending = tokio::time::timeout(
        std::time::Duration::from_secs(1),
        client.list_products(&ProductQuery::default()),
    )
    .await;

    assert!(pending.is_err(), "request resolved: {pending:?}");
}
