use tracing::{debug, info, warn};

use tallybook_core::{DomainError, DomainResult, Money, round_money, sum_money};

use crate::product::{Product, Sku};
use crate::repository::ProductRepository;
use crate::validation::validate_new_product;

/// Application service: product registration and stock adjustment.
#[derive(Debug)]
pub struct ProductService<R> {
    repo: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a new product.
    pub fn register(
        &self,
        sku: impl Into<Sku>,
        name: impl Into<String>,
        stock: i64,
        price: Money,
    ) -> DomainResult<Product> {
        let sku = sku.into();
        let name = name.into();

        let result = validate_new_product(sku.as_str(), &name, stock, price).and_then(|()| {
            let product = Product::new(sku.clone(), name, stock, price);
            self.repo.save(product.clone())?;
            Ok(product)
        });

        match &result {
            Ok(p) => info!(sku = %p.sku(), stock = p.stock(), price = %p.price(), "product registered"),
            Err(err) => warn!(sku = %sku, error.kind = err.kind(), error = %err, "product registration rejected"),
        }
        result
    }

    /// Add `delta` (possibly negative) units to the stock of `sku`.
    ///
    /// `NotFound` if the sku is unknown; `InvalidState` if the result would be
    /// negative or overflow, in which case the stored product is left untouched.
    pub fn adjust_stock(&self, sku: impl Into<Sku>, delta: i64) -> DomainResult<Product> {
        let sku = sku.into();
        let result = self.try_adjust(&sku, delta);
        match &result {
            Ok(p) => info!(sku = %sku, delta, stock = p.stock(), "stock adjusted"),
            Err(err) => warn!(sku = %sku, delta, error.kind = err.kind(), error = %err, "stock adjustment rejected"),
        }
        result
    }

    fn try_adjust(&self, sku: &Sku, delta: i64) -> DomainResult<Product> {
        let current = self
            .repo
            .get(sku)?
            .ok_or_else(|| DomainError::not_found(format!("product {sku} does not exist")))?;

        let adjusted = current.with_stock_delta(delta)?;
        if adjusted.stock() < 0 {
            return Err(DomainError::invalid_state(format!(
                "stock of {sku} cannot go negative ({} {delta:+})",
                current.stock()
            )));
        }
        self.repo.update(adjusted.clone())?;
        Ok(adjusted)
    }

    pub fn find(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        self.repo.get(sku)
    }

    pub fn list(&self) -> DomainResult<Vec<Product>> {
        let products = self.repo.list()?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    /// Sum of every product's inventory value, rounded to cents.
    pub fn total_inventory_value(&self) -> DomainResult<Money> {
        let values = self
            .repo
            .list()?
            .iter()
            .map(Product::inventory_value)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(round_money(sum_money(values)?))
    }
}
