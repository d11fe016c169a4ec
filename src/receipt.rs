//! Receipt
//!
//! Plain-text rendering of a [`CartSummary`] for terminals.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::cart::CartSummary;

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

impl CartSummary {
    /// Writes the cart lines as a table followed by the look and totals.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Category"]);

        for (idx, product) in self.products.iter().enumerate() {
            builder.push_record([
                format!("#{}", idx + 1),
                product.name.clone(),
                product.category.clone(),
            ]);
        }

        write_receipt_table(&mut out, builder)?;
        write_receipt_summary(&mut out, self)?;

        Ok(())
    }
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Columns::first(), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

fn write_receipt_summary(
    out: &mut impl io::Write,
    summary: &CartSummary,
) -> Result<(), ReceiptError> {
    let lines = [
        (" Look:", summary.promotion.to_string()),
        (" Total:", summary.total_price.clone()),
        (
            " Savings:",
            format!("({}) {}", summary.discount, summary.discount_value),
        ),
    ];

    let label_width = lines
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or_default();

    let value_width = lines
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or_default();

    for (label, value) in &lines {
        write_summary_line(out, label, value, label_width, value_width)?;
    }

    writeln!(out)?;

    Ok(())
}

/// Writes a summary line with a right-aligned label and a right-aligned value column.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), ReceiptError> {
    writeln!(out, "{label:>label_col_width$}  {value:>value_col_width$}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{looks::Look, products::ProductSummary};

    use super::*;

    fn summary() -> CartSummary {
        CartSummary {
            products: vec![
                ProductSummary {
                    name: "Oxford Shirt".to_string(),
                    category: "Shirt".to_string(),
                },
                ProductSummary {
                    name: "Chinos".to_string(),
                    category: "Pants".to_string(),
                },
            ],
            promotion: Look::Double,
            total_price: "150.00".to_string(),
            discount_value: "30.00".to_string(),
            discount: "16.67%".to_string(),
        }
    }

    #[test]
    fn write_to_lists_every_line_and_the_totals() -> TestResult {
        let mut out = Vec::new();

        summary().write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Oxford Shirt"), "missing first line: {text}");
        assert!(text.contains("Pants"), "missing category: {text}");
        assert!(text.contains("DOUBLE LOOK"), "missing look: {text}");
        assert!(text.contains("150.00"), "missing total: {text}");
        assert!(text.contains("(16.67%) 30.00"), "missing savings: {text}");

        Ok(())
    }

    #[test]
    fn summary_values_are_right_aligned() -> TestResult {
        let mut out = Vec::new();

        write_receipt_summary(&mut out, &summary())?;

        let text = String::from_utf8(out)?;
        let widths: Vec<usize> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().count())
            .collect();

        assert_eq!(widths.len(), 3, "expected three summary lines: {text}");
        assert!(
            widths.windows(2).all(|pair| pair.first() == pair.last()),
            "summary lines should share a width: {text}"
        );

        Ok(())
    }
}
