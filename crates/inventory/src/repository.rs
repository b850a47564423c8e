use std::sync::Arc;

use tallybook_core::{DomainResult, InMemoryKeyedStore};

use crate::product::{Product, Sku};

/// Storage contract for products, keyed by sku.
pub trait ProductRepository: Send + Sync {
    /// Store a new product; `DuplicateKey` if the sku is taken.
    fn save(&self, product: Product) -> DomainResult<()>;
    fn get(&self, sku: &Sku) -> DomainResult<Option<Product>>;
    /// Snapshot of all products in registration order.
    fn list(&self) -> DomainResult<Vec<Product>>;
    /// Replace the product with the same sku; `NotFound` if absent.
    fn update(&self, product: Product) -> DomainResult<()>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn save(&self, product: Product) -> DomainResult<()> {
        (**self).save(product)
    }

    fn get(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        (**self).get(sku)
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        (**self).list()
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        (**self).update(product)
    }
}

/// In-memory product repository for tests/dev.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: InMemoryKeyedStore<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryKeyedStore::new("product"),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, product: Product) -> DomainResult<()> {
        self.store.insert(product)
    }

    fn get(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        self.store.get(sku)
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        self.store.list()
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        self.store.replace(product)
    }
}
