//! Product service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use product_api::domain::{NewProduct, Product, ProductChanges};
use product_api::errors::AppError;
use product_api::infra::MockProductRepository;
use product_api::services::{ProductManager, ProductService};
use product_api::types::PaginationParams;

fn create_test_product(id: i32, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: None,
        price: 10.0,
        quantity: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn service(repo: MockProductRepository) -> ProductManager<MockProductRepository> {
    ProductManager::new(Arc::new(repo))
}

#[tokio::test]
async fn test_get_product_success() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(create_test_product(id, "Lamp"))));

    let result = service(repo).get_product(7).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 7);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get_product(9999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_products_uses_fixed_page_size() {
    let mut repo = MockProductRepository::new();
    repo.expect_list()
        .with(eq(2u64), eq(25u64))
        .times(1)
        .returning(|_, _| Ok((vec![create_test_product(26, "Last")], 26)));

    let page = service(repo)
        .list_products(PaginationParams::new(2))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.per_page, 25);
    assert_eq!(page.meta.total, 26);
    assert_eq!(page.meta.total_pages, 2);
}

#[tokio::test]
async fn test_list_products_page_zero_reads_first_page() {
    let mut repo = MockProductRepository::new();
    repo.expect_list()
        .with(eq(1u64), eq(25u64))
        .returning(|_, _| Ok((vec![], 0)));

    let page = service(repo)
        .list_products(PaginationParams::new(0))
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.total_pages, 0);
}

#[tokio::test]
async fn test_create_product_passes_validated_data() {
    let mut repo = MockProductRepository::new();
    repo.expect_create()
        .withf(|p: &NewProduct| p.name == "Test Product" && p.price == 100.0)
        .returning(|p| Ok(create_test_product(1, &p.name)));

    let product = service(repo)
        .create_product(NewProduct {
            name: "Test Product".to_string(),
            description: Some("Test Description".to_string()),
            price: 100.0,
            quantity: Some(5),
        })
        .await
        .unwrap();

    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Test Product");
}

#[tokio::test]
async fn test_update_product_success() {
    let mut repo = MockProductRepository::new();
    repo.expect_update()
        .withf(|id, changes: &ProductChanges| {
            *id == 3 && changes.name.as_deref() == Some("Updated Product")
        })
        .returning(|id, changes| Ok(create_test_product(id, &changes.name.unwrap_or_default())));

    let changes = ProductChanges {
        name: Some("Updated Product".to_string()),
        ..Default::default()
    };
    let product = service(repo).update_product(3, changes).await.unwrap();

    assert_eq!(product.name, "Updated Product");
}

#[tokio::test]
async fn test_update_product_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_update().returning(|_, _| Err(AppError::NotFound));

    let result = service(repo)
        .update_product(9999, ProductChanges::default())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_product_success() {
    let mut repo = MockProductRepository::new();
    repo.expect_delete().with(eq(4)).times(1).returning(|_| Ok(()));

    let result = service(repo).delete_product(4).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_product_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let result = service(repo).delete_product(9999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
