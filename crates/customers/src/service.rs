use std::sync::Arc;

use tracing::{debug, info, warn};

use tallybook_core::{Clock, DomainError, DomainResult, SystemClock};

use crate::customer::Customer;
use crate::repository::CustomerRepository;
use crate::validation::CustomerValidator;

/// Application service: customer registration.
///
/// Depends on the [`CustomerRepository`] abstraction only. Validation and the
/// email uniqueness check both run before the repository is written.
pub struct CustomerService<R> {
    repo: R,
    validator: CustomerValidator,
    clock: Arc<dyn Clock>,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    /// Default rules, local system date.
    pub fn new(repo: R) -> Self {
        Self::with_parts(repo, CustomerValidator::default(), Arc::new(SystemClock))
    }

    pub fn with_parts(repo: R, validator: CustomerValidator, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            validator,
            clock,
        }
    }

    /// Default rules, custom clock.
    pub fn with_clock(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self::with_parts(repo, CustomerValidator::default(), clock)
    }

    pub fn register(&self, customer: Customer) -> DomainResult<()> {
        let result = self.try_register(&customer);
        match &result {
            Ok(()) => info!(customer_id = %customer.id(), "customer registered"),
            Err(err) => warn!(
                customer_id = %customer.id(),
                error.kind = err.kind(),
                error = %err,
                "customer registration rejected"
            ),
        }
        result
    }

    fn try_register(&self, customer: &Customer) -> DomainResult<()> {
        self.validator.validate(customer, self.clock.today())?;
        if self.repo.find_by_email(customer.email())?.is_some() {
            return Err(DomainError::duplicate_key(format!(
                "a customer with email {} already exists",
                customer.email()
            )));
        }
        self.repo.add(customer.clone())
    }

    pub fn list(&self) -> DomainResult<Vec<Customer>> {
        let customers = self.repo.list()?;
        debug!(count = customers.len(), "listed customers");
        Ok(customers)
    }

    pub fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        self.repo.find_by_email(email)
    }

    /// Age of `customer` according to this service's clock.
    pub fn age_of(&self, customer: &Customer) -> i32 {
        customer.age_with(self.clock.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCustomerRepository;
    use chrono::NaiveDate;
    use tallybook_core::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> CustomerService<Arc<InMemoryCustomerRepository>> {
        CustomerService::with_clock(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(FixedClock(date(2025, 10, 14))),
        )
    }

    fn juan() -> Customer {
        Customer::new("1", "Juan Pérez", "juan@example.com", date(1993, 3, 10))
    }

    #[test]
    fn register_stores_valid_customer() {
        let svc = service();
        svc.register(juan()).unwrap();

        let found = svc.find_by_email("juan@example.com").unwrap();
        assert_eq!(found, Some(juan()));
        assert_eq!(svc.list().unwrap(), vec![juan()]);
        assert_eq!(svc.age_of(&juan()), 32);
    }

    #[test]
    fn register_rejects_minor_without_storing() {
        let svc = service();
        let minor = Customer::new("2", "Ana Díaz", "ana@example.com", date(2010, 1, 1));

        let err = svc.register(minor).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn register_rejects_duplicate_email() {
        let svc = service();
        svc.register(juan()).unwrap();

        let twin = Customer::new("2", "Juan P.", "juan@example.com", date(1990, 5, 5));
        let err = svc.register(twin).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
        assert_eq!(svc.list().unwrap(), vec![juan()]);
    }

    #[test]
    fn validation_runs_before_duplicate_check() {
        let svc = service();
        svc.register(juan()).unwrap();

        let blank = Customer::new("2", " ", "juan@example.com", date(1990, 5, 5));
        let err = svc.register(blank).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
    }

    #[test]
    fn register_uses_injected_clock_for_age() {
        let repo = Arc::new(InMemoryCustomerRepository::new());
        let birth = date(2007, 10, 15);

        let early = CustomerService::with_clock(repo.clone(), Arc::new(FixedClock(date(2025, 10, 14))));
        let c = Customer::new("3", "Luz Mora", "luz@example.com", birth);
        assert!(early.register(c.clone()).is_err());

        let later = CustomerService::with_clock(repo.clone(), Arc::new(FixedClock(date(2025, 10, 15))));
        later.register(c).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn custom_validator_is_honoured() {
        let svc = CustomerService::with_parts(
            InMemoryCustomerRepository::new(),
            CustomerValidator::empty(),
            Arc::new(FixedClock(date(2025, 10, 14))),
        );
        let child = Customer::new("4", "Tomás", "not-an-email", date(2020, 1, 1));
        svc.register(child).unwrap();
        assert_eq!(svc.list().unwrap().len(), 1);
    }
}
