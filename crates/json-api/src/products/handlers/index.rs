//! Product Index Handler

use salvo::prelude::*;

use crate::{extensions::*, products::get::ProductResponse};

/// Product Index Handler
///
/// Returns every product in the catalog, featured products first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("list products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use heirloom::products::ProductUuid;
    use heirloom_app::domain::products::MockProductsService;

    use crate::test_helpers::products_service;

    use super::{super::tests::make_product, *};

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        repo.expect_get_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: Vec<ProductResponse> = res.take_json().await?;

        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_service_order() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(move || {
            Ok(vec![
                make_product(uuid_a, "Silk Scarf", 3_500),
                make_product(uuid_b, "Wool Coat", 45_000),
            ])
        });

        repo.expect_get_product().never();

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 2, "expected two products");
        assert_eq!(response[0].id, uuid_a.into_uuid());
        assert_eq!(response[1].id, uuid_b.into_uuid());
        assert_eq!(response[1].price, 45_000);

        Ok(())
    }
}
