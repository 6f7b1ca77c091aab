/// Category labels offered when entering a transaction. Any other text is accepted too.
pub const SUGGESTED_CATEGORIES: [&str; 6] = [
    "Salary",
    "Rent",
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
];

/// Returns true when the label is exactly one of the suggested categories.
///
/// Matching is case-sensitive, the same way the ledger groups categories.
pub fn is_suggested(label: &str) -> bool {
    SUGGESTED_CATEGORIES.contains(&label.trim())
}
