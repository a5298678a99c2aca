use rust_decimal::Decimal;

pub const DEFAULT_BRANCH: &str = "0001";
pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;
pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Branch assigned to new accounts when the caller does not pick one
    pub branch: String,
    /// Largest amount a single withdrawal may take
    pub withdrawal_limit: Decimal,
    pub max_withdrawals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: Decimal::from(DEFAULT_WITHDRAWAL_LIMIT),
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        }
    }
}
