use std::sync::Arc;

use tallybook_core::{DomainResult, InMemoryKeyedStore};

use crate::customer::Customer;

/// Storage contract for customers.
///
/// Implementations do not enforce email uniqueness; that is the service's job.
pub trait CustomerRepository: Send + Sync {
    /// Store a customer, replacing any existing record with the same id.
    fn add(&self, customer: Customer) -> DomainResult<()>;
    /// Snapshot of all customers in insertion order.
    fn list(&self) -> DomainResult<Vec<Customer>>;
    /// First customer whose email equals `email` exactly.
    fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>>;
}

impl<R> CustomerRepository for Arc<R>
where
    R: CustomerRepository + ?Sized,
{
    fn add(&self, customer: Customer) -> DomainResult<()> {
        (**self).add(customer)
    }

    fn list(&self) -> DomainResult<Vec<Customer>> {
        (**self).list()
    }

    fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        (**self).find_by_email(email)
    }
}

/// In-memory customer repository for tests/dev.
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    store: InMemoryKeyedStore<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryKeyedStore::new("customer"),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn add(&self, customer: Customer) -> DomainResult<()> {
        self.store.upsert(customer)
    }

    fn list(&self) -> DomainResult<Vec<Customer>> {
        self.store.list()
    }

    fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        self.store.find(|c| c.email() == email)
    }
}
