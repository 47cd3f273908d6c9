//! Exercises `ProductRepositoryFakeStore` over real HTTP against an axum
//! mock catalog bound to an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tokio::net::TcpListener;

use business::domain::errors::RepositoryError;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductId, Rating};
use fakestore::{FakeStoreClient, ProductRepositoryFakeStore};

const CATALOG: &str = r#"[
    {
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    },
    {
        "id": 9,
        "title": "WD 2TB Elements Portable External Hard Drive - USB 3.0",
        "price": 64,
        "description": "USB 3.0 and USB 2.0 compatibility",
        "category": "electronics",
        "image": "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
        "rating": { "rate": 3.3, "count": 203 }
    }
]"#;

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn repository(addr: SocketAddr) -> ProductRepositoryFakeStore {
    ProductRepositoryFakeStore::new(FakeStoreClient::new(
        format!("http://{}", addr),
        Duration::from_secs(5),
    ))
}

#[tokio::test]
async fn should_fetch_and_map_catalog() {
    let addr = serve(Router::new().route(
        "/products",
        get(|| async { ([("content-type", "application/json")], CATALOG) }),
    ))
    .await;

    let products = repository(addr).get_all().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[1].price, 64.0);
    assert_eq!(products[1].category, "electronics");
    assert_eq!(
        products[1].rating,
        Some(Rating {
            rate: 3.3,
            count: 203
        })
    );
}

#[tokio::test]
async fn should_return_empty_list_for_empty_catalog() {
    let addr = serve(Router::new().route("/products", get(|| async { "[]" }))).await;

    let products = repository(addr).get_all().await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn should_fail_with_status_error_on_server_error() {
    let addr = serve(Router::new().route(
        "/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    ))
    .await;

    let result = repository(addr).get_all().await;

    assert!(matches!(
        result,
        Err(RepositoryError::UnexpectedStatus(500))
    ));
}

#[tokio::test]
async fn should_fail_with_status_error_when_route_is_missing() {
    let addr = serve(Router::new()).await;

    let result = repository(addr).get_all().await;

    assert!(matches!(
        result,
        Err(RepositoryError::UnexpectedStatus(404))
    ));
}

#[tokio::test]
async fn should_fail_with_decode_error_on_malformed_body() {
    let addr = serve(Router::new().route(
        "/products",
        get(|| async { r#"{"not":"an array"}"# }),
    ))
    .await;

    let result = repository(addr).get_all().await;

    assert!(matches!(result, Err(RepositoryError::Decode)));
}

#[tokio::test]
async fn should_fail_with_network_error_when_server_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = repository(addr).get_all().await;

    assert!(matches!(result, Err(RepositoryError::Network)));
}

#[tokio::test]
async fn should_fail_with_network_error_when_server_hangs() {
    let addr = serve(Router::new().route(
        "/products",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "[]"
        }),
    ))
    .await;
    let repository = ProductRepositoryFakeStore::new(FakeStoreClient::new(
        format!("http://{}", addr),
        Duration::from_secs(1),
    ));

    let result = repository.get_all().await;

    assert!(matches!(result, Err(RepositoryError::Network)));
}
