pub struct TemplateCall;

impl TemplateCall {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";
    /// Separates the name and each argument.
    pub const SEPARATOR: &'static str = "|";
    /// Splits an argument into `key=value`; only the first one counts.
    pub const ASSIGN: &'static str = "=";
}
