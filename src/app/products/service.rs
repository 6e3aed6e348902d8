//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};

use super::model::Product;
use super::store::ProductRepository;
use super::PRODUCTS_PATH;
use crate::core::response::Outcome;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn list_products(&self) -> Outcome<Vec<Product>> {
        Outcome::Success(self.repository.list())
    }

    pub fn get_product(&self, id: i32) -> Outcome<Product> {
        match self.repository.get_by_id(id) {
            Some(product) => Outcome::Success(product),
            None => {
                debug!("产品 {} 不存在", id);
                Outcome::NotFound
            }
        }
    }

    pub fn create_product(&self, product: Product) -> Outcome<Product> {
        let location = format!("{}/{}", PRODUCTS_PATH, product.id);
        self.repository.add(product.clone());
        info!("已创建产品 {}", product.id);

        Outcome::Created {
            location,
            body: product,
        }
    }

    /// 先按路径 id 检查存在性，再以请求体本身的 id 执行更新
    pub fn update_product(&self, id: i32, product: Product) -> Outcome<()> {
        if self.repository.get_by_id(id).is_none() {
            debug!("更新失败，产品 {} 不存在", id);
            return Outcome::NotFound;
        }

        let target = product.id;
        self.repository.update(product);
        info!("已更新产品 {} (路径 id: {})", target, id);

        Outcome::NoContentSuccess
    }

    pub fn delete_product(&self, id: i32) -> Outcome<()> {
        if self.repository.get_by_id(id).is_none() {
            debug!("删除失败，产品 {} 不存在", id);
            return Outcome::NotFound;
        }

        self.repository.delete(id);
        info!("已删除产品 {}", id);

        Outcome::NoContentSuccess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::products::store::InMemoryProductStore;
    use std::sync::Mutex;

    /// 记录调用的仓储替身，查询委托给内存存储
    #[derive(Default)]
    struct RecordingRepository {
        inner: InMemoryProductStore,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingRepository {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl ProductRepository for RecordingRepository {
        fn list(&self) -> Vec<Product> {
            self.inner.list()
        }

        fn get_by_id(&self, id: i32) -> Option<Product> {
            self.inner.get_by_id(id)
        }

        fn add(&self, product: Product) {
            self.record(format!("add:{}", product.id));
            self.inner.add(product);
        }

        fn update(&self, product: Product) {
            self.record(format!("update:{}", product.id));
            self.inner.update(product);
        }

        fn delete(&self, id: i32) {
            self.record(format!("delete:{}", id));
            self.inner.delete(id);
        }
    }

    fn setup() -> (Arc<RecordingRepository>, ProductService) {
        let repository = Arc::new(RecordingRepository::default());
        let service = ProductService::new(repository.clone());
        (repository, service)
    }

    #[test]
    fn test_list_products_returns_seeded() {
        let (_, service) = setup();

        match service.list_products() {
            Outcome::Success(products) => assert_eq!(products.len(), 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_get_product() {
        let (_, service) = setup();

        match service.get_product(1) {
            Outcome::Success(product) => assert_eq!(product.name, "Product1"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(service.get_product(999).is_not_found());
    }

    #[test]
    fn test_create_product() {
        let (repository, service) = setup();
        let product = Product::new(3, "Product3", 0.0);

        let outcome = service.create_product(product.clone());

        assert_eq!(
            outcome,
            Outcome::Created {
                location: "/api/products/3".to_string(),
                body: product.clone(),
            }
        );
        assert_eq!(repository.calls(), vec!["add:3"]);
        assert_eq!(service.get_product(3), Outcome::Success(product));
    }

    #[test]
    fn test_update_missing_never_invokes_store() {
        let (repository, service) = setup();

        let outcome = service.update_product(4, Product::new(4, "test", 0.0));

        assert!(outcome.is_not_found());
        assert!(repository.calls().is_empty());
        assert_eq!(repository.list().len(), 2);
    }

    #[test]
    fn test_update_existing() {
        let (repository, service) = setup();

        let outcome = service.update_product(1, Product::new(1, "UpdatedProduct", 20.0));

        assert_eq!(outcome, Outcome::NoContentSuccess);
        assert_eq!(repository.calls(), vec!["update:1"]);
        assert_eq!(
            service.get_product(1),
            Outcome::Success(Product::new(1, "UpdatedProduct", 20.0))
        );
    }

    #[test]
    fn test_update_applies_body_id() {
        let (repository, service) = setup();

        let outcome = service.update_product(1, Product::new(2, "Renamed", 5.0));

        assert_eq!(outcome, Outcome::NoContentSuccess);
        assert_eq!(repository.calls(), vec!["update:2"]);
        assert_eq!(repository.get_by_id(1).unwrap().name, "Product1");
        assert_eq!(repository.get_by_id(2).unwrap().name, "Renamed");
    }

    #[test]
    fn test_delete_missing_never_invokes_store() {
        let (repository, service) = setup();

        assert!(service.delete_product(999).is_not_found());
        assert!(repository.calls().is_empty());
        assert_eq!(repository.list().len(), 2);
    }

    #[test]
    fn test_delete_existing() {
        let (repository, service) = setup();

        assert_eq!(service.delete_product(1), Outcome::NoContentSuccess);
        assert_eq!(repository.calls(), vec!["delete:1"]);
        assert!(service.get_product(1).is_not_found());
    }
}
