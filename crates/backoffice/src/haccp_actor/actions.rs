/// Custom actions for temperature logs.
#[derive(Debug, Clone)]
pub enum HaccpAction {
    /// Records what was done about an out-of-limit reading. Allowed once per log, and only
    /// for logs that did not comply.
    RecordCorrectiveAction(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HaccpActionResult {
    CorrectiveActionRecorded,
}
