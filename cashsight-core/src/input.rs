//! Input validation
//!
//! Global invariants enforced:
//! - Zero is a valid field value; only absent/null fields are missing
//! - Missing-field names are reported in declaration order
//! - Nothing downstream runs on invalid input

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unvalidated financial input, as received from the caller.
///
/// Each field maps a missing or `null` JSON value to `None` so the validator
/// can name exactly which fields were absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawFinancialInput {
    /// Sales made on credit during the period
    #[serde(default)]
    pub sales_credit: Option<f64>,

    /// Cash actually collected during the period
    #[serde(default)]
    pub cash_collected: Option<f64>,

    /// Expenses paid out during the period
    #[serde(default)]
    pub expenses_paid: Option<f64>,

    /// Fraction of customers paying late, in [0, 1]
    #[serde(default)]
    pub customers_late_ratio: Option<f64>,
}

/// Validated financial input for one evaluation. Immutable once built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FinancialInput {
    pub sales_credit: f64,
    pub cash_collected: f64,
    pub expenses_paid: f64,
    pub customers_late_ratio: f64,
}

/// One or more required input fields were absent
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Names of the absent fields, in declaration order
    pub missing: Vec<&'static str>,
}

impl RawFinancialInput {
    /// Build a fully-populated raw input. Used by fixtures and callers that
    /// already hold all four values.
    pub fn complete(
        sales_credit: f64,
        cash_collected: f64,
        expenses_paid: f64,
        customers_late_ratio: f64,
    ) -> Self {
        RawFinancialInput {
            sales_credit: Some(sales_credit),
            cash_collected: Some(cash_collected),
            expenses_paid: Some(expenses_paid),
            customers_late_ratio: Some(customers_late_ratio),
        }
    }

    /// Names of absent fields, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.sales_credit.is_none() {
            missing.push("sales_credit");
        }
        if self.cash_collected.is_none() {
            missing.push("cash_collected");
        }
        if self.expenses_paid.is_none() {
            missing.push("expenses_paid");
        }
        if self.customers_late_ratio.is_none() {
            missing.push("customers_late_ratio");
        }
        missing
    }

    /// Validate presence of all four fields.
    ///
    /// Zero values pass validation; only `None` fields fail.
    pub fn validate(&self) -> Result<FinancialInput, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        // All fields checked above
        Ok(FinancialInput {
            sales_credit: self.sales_credit.unwrap_or_default(),
            cash_collected: self.cash_collected.unwrap_or_default(),
            expenses_paid: self.expenses_paid.unwrap_or_default(),
            customers_late_ratio: self.customers_late_ratio.unwrap_or_default(),
        })
    }
}
