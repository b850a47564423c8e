//! Demonstration runs for the four modules.
//!
//! Each run wires an in-memory repository into its service, performs a fixed
//! sequence, writes human-readable lines to `out` and returns what it built so
//! callers can inspect it. Expected domain failures are reported, not
//! propagated; only I/O and malformed demo data end a run early.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use tallybook_core::{Clock, Money};
use tallybook_customers::{Customer, CustomerService, InMemoryCustomerRepository};
use tallybook_invoicing::{
    DiscountStrategy, FixedDiscount, Invoice, InvoiceItem, InvoicingService, NoDiscount,
    PercentageDiscount,
};
use tallybook_inventory::{InMemoryProductRepository, Product, ProductService};
use tallybook_reports::{InMemorySaleRepository, Sale, SaleRepository, SalesReportService};

/// Parse a literal `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").with_context(|| format!("invalid date {value:?}"))
}

fn money(value: &str) -> anyhow::Result<Money> {
    value
        .parse()
        .with_context(|| format!("invalid amount {value:?}"))
}

fn json_line(out: &mut dyn Write, label: &str, value: &impl Serialize) -> anyhow::Result<()> {
    writeln!(out, "{label} {}", serde_json::to_string(value)?)?;
    Ok(())
}

/// Register two customers and list who made it in.
pub fn customers(out: &mut dyn Write, clock: Arc<dyn Clock>) -> anyhow::Result<Vec<Customer>> {
    let service = CustomerService::with_clock(InMemoryCustomerRepository::new(), clock);

    let candidates = [
        Customer::new("1", "Juan Pérez", "juan@example.com", parse_date("1993-03-10")?),
        Customer::new("2", "Ana Díaz", "ana@example.com", parse_date("2002-07-15")?),
    ];

    writeln!(out, "== Customers ==")?;
    for candidate in candidates {
        match service.register(candidate.clone()) {
            Ok(()) => json_line(out, "registered", &candidate)?,
            Err(err) => {
                warn!(customer_id = %candidate.id(), error = %err, "demo customer rejected");
                writeln!(out, "error registering customer {}: {err}", candidate.id())?;
            }
        }
    }

    let registered = service.list()?;
    for c in &registered {
        writeln!(
            out,
            "- {} | {} | {} | age={}",
            c.id(),
            c.full_name(),
            c.email(),
            service.age_of(c)
        )?;
    }
    Ok(registered)
}

fn invoice_items() -> anyhow::Result<Vec<InvoiceItem>> {
    Ok(vec![
        InvoiceItem::new("A100", "Teclado", 2, money("25.0")?),
        InvoiceItem::new("B200", "Mouse", 1, money("18.5")?),
        InvoiceItem::new("C300", "Pad", 3, money("5.75")?),
    ])
}

/// Price the same items under each discount strategy.
pub fn invoicing(out: &mut dyn Write, clock: Arc<dyn Clock>) -> anyhow::Result<Vec<Invoice>> {
    let strategies: Vec<(&str, Arc<dyn DiscountStrategy>)> = vec![
        ("F-0001", Arc::new(NoDiscount)),
        ("F-0002", Arc::new(PercentageDiscount::new(10))),
        ("F-0003", Arc::new(FixedDiscount::new(money("8.0")?))),
    ];

    writeln!(out, "== Invoicing ==")?;
    let mut invoices = Vec::with_capacity(strategies.len());
    for (number, strategy) in strategies {
        let service = InvoicingService::with_clock(strategy, clock.clone());
        match service.calculate(number, invoice_items()?) {
            Ok(invoice) => {
                writeln!(
                    out,
                    "{} ({}): subtotal {} | total {}",
                    invoice.number(),
                    invoice.strategy_name(),
                    invoice.subtotal(),
                    invoice.total()
                )?;
                invoices.push(invoice);
            }
            Err(err) => writeln!(out, "error calculating {number}: {err}")?,
        }
    }
    Ok(invoices)
}

/// Register products, receive stock, and print the inventory.
pub fn inventory(out: &mut dyn Write) -> anyhow::Result<Vec<Product>> {
    let service = ProductService::new(InMemoryProductRepository::new());

    writeln!(out, "== Inventory ==")?;
    for (sku, name, stock, price) in [("P-001", "Teclado", 10, "25.5"), ("P-002", "Mouse", 15, "12.0")] {
        match service.register(sku, name, stock, money(price)?) {
            Ok(product) => json_line(out, "registered", &product)?,
            Err(err) => writeln!(out, "error registering {sku}: {err}")?,
        }
    }

    match service.adjust_stock("P-001", 5) {
        Ok(product) => writeln!(out, "adjusted {} -> stock {}", product.sku(), product.stock())?,
        Err(err) => writeln!(out, "error adjusting P-001: {err}")?,
    }
    if let Err(err) = service.adjust_stock("P-002", -100) {
        writeln!(out, "rejected P-002 -100: {err}")?;
    }

    let products = service.list()?;
    for p in &products {
        writeln!(
            out,
            "- {} | {} | stock={} | price={} | value={}",
            p.sku(),
            p.name(),
            p.stock(),
            p.price(),
            p.inventory_value()?
        )?;
    }
    writeln!(out, "inventory value: {}", service.total_inventory_value()?)?;
    Ok(products)
}

/// Totals produced by [`reports`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub grand_total: Money,
    pub carlos: Money,
    pub mouse: Money,
}

/// Record three sales and print the totals.
pub fn reports(out: &mut dyn Write) -> anyhow::Result<ReportTotals> {
    let repo = Arc::new(InMemorySaleRepository::new());
    let service = SalesReportService::new(repo.clone());
    let day = parse_date("2025-10-14")?;

    repo.register(Sale::new("V-001", "Carlos", "Teclado", 2, money("25.5")?, day))?;
    repo.register(Sale::new("V-002", "Santiago", "Mouse", 3, money("12.0")?, day))?;
    repo.register(Sale::new("V-003", "Carlos", "Monitor", 1, money("80.0")?, day))?;

    writeln!(out, "== Sales ==")?;
    for sale in repo.list()? {
        writeln!(
            out,
            "{}: {} bought {}x {} for ${}",
            sale.id(),
            sale.customer(),
            sale.quantity(),
            sale.product(),
            sale.total()?
        )?;
    }

    let totals = ReportTotals {
        grand_total: service.grand_total()?,
        carlos: service.total_for_customer("Carlos")?,
        mouse: service.total_for_product("Mouse")?,
    };
    json_line(out, "totals", &totals)?;
    Ok(totals)
}

/// Run all four demonstrations in order.
pub fn run_all(out: &mut dyn Write, clock: Arc<dyn Clock>) -> anyhow::Result<()> {
    let customers = customers(out, clock.clone())?;
    let invoices = invoicing(out, clock)?;
    let products = inventory(out)?;
    let totals = reports(out)?;
    info!(
        customers = customers.len(),
        invoices = invoices.len(),
        products = products.len(),
        grand_total = %totals.grand_total,
        "demo finished"
    );
    Ok(())
}
