use crate::models::ExpenseRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
}

/// Category → summed amount, keys kept in first-seen order so chart labels
/// are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index.get(category).map(|&i| self.entries[i].total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    /// Sum over every category.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Largest absolute category total, used to scale bars.
    pub fn max_abs(&self) -> Decimal {
        self.entries
            .iter()
            .map(|e| e.total.abs())
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    fn add(&mut self, category: &str, amount: Decimal) {
        match self.index.get(category) {
            Some(&i) => {
                let e = &mut self.entries[i];
                e.total += amount;
                e.count += 1;
            }
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    total: amount,
                    count: 1,
                });
            }
        }
    }
}

/// Group expenses by category. Negative amounts sum algebraically.
pub fn aggregate_by_category(records: &[ExpenseRecord]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for r in records {
        totals.add(&r.category, r.amount);
    }
    totals
}
