//! # Rendering
//!
//! Plain-text output for listings and receipts. Every function returns a
//! `String` so commands stay testable without capturing stdout.
//!
//! ## Receipt Layout
//! ```text
//! ========================================
//!                 Grocer
//! ========================================
//! Customer: Asha
//! Date:     2024-06-01 18:45:12
//! ----------------------------------------
//! Apple x 3 = ₹150
//! Milk x 2 = ₹60
//! ----------------------------------------
//! Total: ₹210
//! ========================================
//! ```
//!
//! ## Bill History Layout
//! ```text
//! Asha - ₹210 on 2024-06-01 18:45:12
//!   - Apple x 3 = ₹150
//!   - Milk x 2 = ₹60
//!   Total: ₹210
//! ```

use std::fmt::Write;

use grocer_core::{Bill, BillLine, Category, Item, QuantityLabel};

use crate::config::DisplayConfig;

const RULE_WIDTH: usize = 40;

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// `name x qty = subtotal`
fn line_entry(line: &BillLine) -> String {
    let subtotal = line
        .line_total()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "overflow".to_string());
    format!("{} x {} = {}", line.name, line.qty, subtotal)
}

/// The catalog as an aligned table, one row per item in list order.
pub fn item_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items in the catalog.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:<10}  {:<8}  {}",
        "#", "Name", "Category", "Quantity", "Price"
    );
    for (idx, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:<10}  {:<8}  {}",
            idx + 1,
            item.name,
            item.category.as_str(),
            item.quantity.as_str(),
            item.price()
        );
    }
    out
}

/// One item, field by field.
pub fn item_detail(item: &Item) -> String {
    format!(
        "Name:     {}\nCategory: {}\nQuantity: {}\nPrice:    {}\n",
        item.name,
        item.category,
        item.quantity,
        item.price()
    )
}

/// Full receipt for one bill.
pub fn receipt(bill: &Bill, display: &DisplayConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{:^width$}", display.store_name, width = RULE_WIDTH);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "Customer: {}", bill.name);
    let _ = writeln!(out, "Date:     {}", bill.date_string());
    let _ = writeln!(out, "{}", rule('-'));
    for line in &bill.items {
        let _ = writeln!(out, "{}", line_entry(line));
    }
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "Total: {}", bill.total());
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// Every bill in the given order: a header, each line, then the total.
/// Bills are separated by a blank line.
pub fn bill_history(bills: &[Bill]) -> String {
    if bills.is_empty() {
        return "No bills yet.\n".to_string();
    }

    let mut out = String::new();
    for (idx, bill) in bills.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} - {} on {}",
            bill.name,
            bill.total(),
            bill.date_string()
        );
        for line in &bill.items {
            let _ = writeln!(out, "  - {}", line_entry(line));
        }
        let _ = writeln!(out, "  Total: {}", bill.total());
    }
    out
}

/// The allowed categories and quantity labels.
pub fn options() -> String {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let quantities: Vec<&str> = QuantityLabel::ALL.iter().map(|q| q.as_str()).collect();
    format!(
        "Categories: {}\nQuantities: {}\n",
        categories.join(", "),
        quantities.join(", ")
    )
}
