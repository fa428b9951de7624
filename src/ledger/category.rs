use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of ledger categories. Direction of money flow is inferred from
/// the category alone: `Income` is an inflow, everything else an outflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Income,
    #[serde(rename = "Savings & Investments")]
    SavingsInvestments,
    Essential,
    #[serde(rename = "Non-Essential")]
    NonEssential,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Income,
        Category::SavingsInvestments,
        Category::Essential,
        Category::NonEssential,
    ];

    /// One-letter code accepted during interactive entry.
    pub fn code(&self) -> char {
        match self {
            Category::Income => 'I',
            Category::SavingsInvestments => 'S',
            Category::Essential => 'E',
            Category::NonEssential => 'N',
        }
    }

    /// Resolves an entry code against the closed category list.
    pub fn from_code(code: char) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.code() == code.to_ascii_uppercase())
    }

    /// Display label, identical to the stored representation.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::SavingsInvestments => "Savings & Investments",
            Category::Essential => "Essential",
            Category::NonEssential => "Non-Essential",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Category::Income)
    }

    pub fn is_savings(&self) -> bool {
        matches!(self, Category::SavingsInvestments)
    }

    /// Closed list of sub-category labels allowed for this category.
    pub fn sub_categories(&self) -> &'static [&'static str] {
        match self {
            Category::Income => &["Income", "Income 2", "Income 3"],
            Category::SavingsInvestments => &["Emergency Fund", "Roth IRA"],
            Category::Essential => &[
                "Bills & Utilities",
                "Medical",
                "Auto & Transport",
                "Education",
                "Health & Fitness",
                "Pets",
                "Groceries",
                "Student Loan",
                "Car Payment",
            ],
            Category::NonEssential => &[
                "Shopping",
                "Entertainment",
                "Food & Dining",
                "Gifts",
                "Travel",
                "Charity",
                "Subscriptions",
                "Other",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn codes_resolve_case_insensitively() {
        assert_eq!(Category::from_code('s'), Some(Category::SavingsInvestments));
        assert_eq!(Category::from_code('N'), Some(Category::NonEssential));
        assert_eq!(Category::from_code('x'), None);
    }

    #[test]
    fn every_category_has_sub_categories() {
        for category in Category::ALL {
            assert!(!category.sub_categories().is_empty());
        }
    }

    #[test]
    fn only_income_counts_as_inflow() {
        assert!(Category::Income.is_income());
        assert!(!Category::SavingsInvestments.is_income());
        assert!(Category::SavingsInvestments.is_savings());
        assert!(!Category::Essential.is_savings());
    }
}
