use std::sync::{Arc, RwLock};

use tallybook_core::{DomainError, DomainResult};

use crate::sale::Sale;

/// Storage contract for the sales log (append-only).
pub trait SaleRepository: Send + Sync {
    /// Append a sale. Ids are not checked for uniqueness.
    fn register(&self, sale: Sale) -> DomainResult<()>;
    /// Snapshot of all sales in registration order.
    fn list(&self) -> DomainResult<Vec<Sale>>;
}

impl<R> SaleRepository for Arc<R>
where
    R: SaleRepository + ?Sized,
{
    fn register(&self, sale: Sale) -> DomainResult<()> {
        (**self).register(sale)
    }

    fn list(&self) -> DomainResult<Vec<Sale>> {
        (**self).list()
    }
}

/// In-memory append-only sales log.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemorySaleRepository {
    sales: RwLock<Vec<Sale>>,
}

impl InMemorySaleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaleRepository for InMemorySaleRepository {
    fn register(&self, sale: Sale) -> DomainResult<()> {
        let mut sales = self
            .sales
            .write()
            .map_err(|_| DomainError::invalid_state("sales log lock poisoned"))?;
        sales.push(sale);
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<Sale>> {
        let sales = self
            .sales
            .read()
            .map_err(|_| DomainError::invalid_state("sales log lock poisoned"))?;
        Ok(sales.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(id: &str) -> Sale {
        Sale::new(
            id,
            "Carlos",
            "Teclado",
            1,
            "1.0".parse().unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 14).unwrap(),
        )
    }

    #[test]
    fn keeps_registration_order_and_allows_repeated_ids() {
        let repo = InMemorySaleRepository::new();
        repo.register(sale("V-002")).unwrap();
        repo.register(sale("V-001")).unwrap();
        repo.register(sale("V-001")).unwrap();

        let ids: Vec<String> = repo
            .list()
            .unwrap()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(ids, vec!["V-002", "V-001", "V-001"]);
    }

    #[test]
    fn list_snapshot_is_detached() {
        let repo = InMemorySaleRepository::new();
        repo.register(sale("V-001")).unwrap();

        let mut snapshot = repo.list().unwrap();
        snapshot.push(sale("V-999"));
        let day = snapshot[0].date();
        snapshot[0] = Sale::new("V-001", "Ana", "Pad", 100, "2.0".parse().unwrap(), day);

        assert_eq!(repo.list().unwrap(), vec![sale("V-001")]);
    }
}
