#[derive(Debug, Clone)]
pub enum SaleAction {
    /// Marks the sale void. Voided sales stay on record but earn nothing.
    Void { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaleActionResult {
    Voided,
}
