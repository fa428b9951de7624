//! Entry collector: one validated transaction per invocation.
//!
//! Validation lives in pure functions so it can be unit tested; the prompt
//! loop re-asks on invalid input and counts the retries instead of recursing.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input};
use rust_decimal::Decimal;

use crate::ledger::{Category, Transaction, DATE_FORMAT};

use super::{output, CommandError};

/// Maximum memo length accepted at entry time.
pub const MEMO_LIMIT: usize = 50;

/// Field-level validation failure shown to the user before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Empty input means today; anything else must parse as `mm-dd-yyyy`.
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        ValidationError::new("Invalid date format. Please enter in mm-dd-yyyy format.")
    })
}

/// Resolves a one-letter category code, case-insensitively.
pub fn parse_category_code(input: &str) -> Result<Category, ValidationError> {
    let code = input.trim();
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Category::from_code(letter).ok_or_else(invalid_category),
        _ => Err(invalid_category()),
    }
}

fn invalid_category() -> ValidationError {
    ValidationError::new("Invalid Category Code. Enter a Category Code from the Category List")
}

/// Resolves a 1-based index into the category's closed sub-category list.
pub fn parse_subcategory_choice(
    category: Category,
    input: &str,
) -> Result<String, ValidationError> {
    let list = category.sub_categories();
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::new("Please enter a sub-category from the list above"))?;
    if choice == 0 || choice > list.len() {
        return Err(ValidationError::new(
            "Please enter a sub-category from the list above",
        ));
    }
    Ok(list[choice - 1].to_string())
}

/// Memos may be empty but never longer than [`MEMO_LIMIT`] characters.
pub fn parse_memo(input: &str) -> Result<String, ValidationError> {
    if input.chars().count() > MEMO_LIMIT {
        return Err(ValidationError::new(
            "Memo passed character limit. Please enter a memo no greater than 50 characters.",
        ));
    }
    Ok(input.to_string())
}

/// Amounts must be strictly positive decimals.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| ValidationError::new("Enter a numeric amount"))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::new("Amount must be positive."));
    }
    Ok(amount)
}

/// Re-prompts until `parse` accepts the input. Returns the parsed value and
/// how many retries it took.
fn prompt_until_valid<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    allow_empty: bool,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<(T, u32), CommandError> {
    let mut retries = 0;
    loop {
        let raw: String = Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;
        match parse(&raw) {
            Ok(value) => return Ok((value, retries)),
            Err(err) => {
                output::warning(err);
                retries += 1;
            }
        }
    }
}

pub fn collect_date(theme: &ColorfulTheme) -> Result<NaiveDate, CommandError> {
    let (date, _) = prompt_until_valid(
        theme,
        "Transaction date (mm-dd-yyyy, empty for today)",
        true,
        parse_entry_date,
    )?;
    Ok(date)
}

pub fn collect_category(theme: &ColorfulTheme) -> Result<Category, CommandError> {
    output::section("Categories");
    for category in Category::ALL {
        println!("{} - {}", category.code(), category);
    }
    let (category, _) = prompt_until_valid(theme, "Category code", false, parse_category_code)?;
    Ok(category)
}

pub fn collect_subcategory(
    theme: &ColorfulTheme,
    category: Category,
) -> Result<String, CommandError> {
    output::section("Sub-Categories");
    for (index, name) in category.sub_categories().iter().enumerate() {
        println!("{} - {}", index + 1, name);
    }
    let (sub_category, _) = prompt_until_valid(theme, "Sub-category number", false, |input| {
        parse_subcategory_choice(category, input)
    })?;
    Ok(sub_category)
}

pub fn collect_memo(theme: &ColorfulTheme) -> Result<String, CommandError> {
    let (memo, _) = prompt_until_valid(theme, "Short memo", true, parse_memo)?;
    Ok(memo)
}

pub fn collect_amount(theme: &ColorfulTheme) -> Result<Decimal, CommandError> {
    let (amount, _) = prompt_until_valid(theme, "Amount", false, parse_amount)?;
    Ok(amount)
}

/// Gathers one full transaction, field by field.
pub fn collect_transaction(theme: &ColorfulTheme) -> Result<Transaction, CommandError> {
    let date = collect_date(theme)?;
    let category = collect_category(theme)?;
    let sub_category = collect_subcategory(theme, category)?;
    let memo = collect_memo(theme)?;
    let amount = collect_amount(theme)?;
    Ok(Transaction::new(date, category, sub_category, memo, amount))
}
