//! 产品业务服务

use thiserror::Error;
use tracing::{debug, info};

use super::model::{Product, ProductRequest, ProductResponse};
use super::store::ProductStore;
use crate::core::error::CoreError;

/// 目录领域错误
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product with ID {0} not found")]
    NotFound(String),
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => CoreError::NotFound(err.to_string()),
        }
    }
}

/// 产品服务能力
pub trait ProductService: Send + Sync {
    fn get_product_by_id(&self, id: &str) -> Result<ProductResponse, CatalogError>;

    /// 调用方负责在此之前完成请求校验
    fn create_product(&self, request: ProductRequest) -> Result<ProductResponse, CatalogError>;
}

/// 基于内存目录的产品服务
#[derive(Clone)]
pub struct CatalogService {
    store: ProductStore,
}

impl CatalogService {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

impl ProductService for CatalogService {
    fn get_product_by_id(&self, id: &str) -> Result<ProductResponse, CatalogError> {
        let product = self
            .store
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        debug!(id, "产品查询成功");
        Ok(ProductResponse::from(&product))
    }

    fn create_product(&self, request: ProductRequest) -> Result<ProductResponse, CatalogError> {
        // 读取大小与写入是两次独立的存储调用，并发创建可能得到相同 id
        let id = (self.store.size() + 1).to_string();
        let product = Product::new(id.clone(), request.name, request.price);
        self.store.put(id.clone(), product.clone());
        info!(id = %id, name = %product.name, "产品已创建");
        Ok(ProductResponse::from(&product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (CatalogService, ProductStore) {
        let store = ProductStore::seeded();
        (CatalogService::new(store.clone()), store)
    }

    #[test]
    fn test_get_seeded_products() {
        let (service, _) = service();

        let laptop = service.get_product_by_id("1").unwrap();
        assert_eq!(
            laptop,
            ProductResponse {
                id: "1".to_string(),
                name: "Laptop".to_string(),
                price: 1200.00,
            }
        );

        let mouse = service.get_product_by_id("2").unwrap();
        assert_eq!(mouse.name, "Mouse");
        assert_eq!(mouse.price, 25.00);
    }

    #[test]
    fn test_get_missing_product() {
        let (service, _) = service();
        let err = service.get_product_by_id("999").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("999".to_string()));
        assert_eq!(err.to_string(), "Product with ID 999 not found");
    }

    #[test]
    fn test_create_assigns_next_id() {
        let (service, store) = service();
        let created = service
            .create_product(ProductRequest {
                name: "Keyboard".to_string(),
                price: 45.00,
            })
            .unwrap();

        assert_eq!(created.id, "3");
        assert_eq!(created.name, "Keyboard");
        assert_eq!(created.price, 45.00);
        assert_eq!(store.size(), 3);
        assert_eq!(service.get_product_by_id("3").unwrap(), created);
    }

    #[test]
    fn test_ids_follow_catalog_size() {
        let service = CatalogService::new(ProductStore::new());
        for expected in ["1", "2", "3"] {
            let created = service
                .create_product(ProductRequest {
                    name: "Widget".to_string(),
                    price: 1.0,
                })
                .unwrap();
            assert_eq!(created.id, expected);
        }
    }

    #[test]
    fn test_not_found_maps_to_core_error() {
        let err: CoreError = CatalogError::NotFound("42".to_string()).into();
        assert!(matches!(err, CoreError::NotFound(ref msg) if msg == "Product with ID 42 not found"));
    }

    #[test]
    fn test_repeated_gets_are_identical() {
        let (service, _) = service();
        let first = service.get_product_by_id("2").unwrap();
        let second = service.get_product_by_id("2").unwrap();
        assert_eq!(first, second);
    }
}
