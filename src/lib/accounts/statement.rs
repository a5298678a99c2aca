use crate::accounts;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const HEADER: &str = "================ EXTRATO ================";
const FOOTER: &str = "==========================================";
const NO_MOVEMENTS: &str = "Não foram realizadas movimentações.";

pub struct Statement<'a> {
    account: &'a accounts::Account,
}

impl<'a> Statement<'a> {
    pub fn new(account: &'a accounts::Account) -> Self {
        Self { account }
    }
}

impl std::fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", HEADER)?;
        let history = self.account.history();
        if history.is_empty() {
            writeln!(f, "{}", NO_MOVEMENTS)?;
        }
        for transaction in history {
            writeln!(
                f,
                "{} - {}: {:.2}",
                transaction.timestamp.format(TIMESTAMP_FORMAT),
                transaction.kind,
                accounts::round_amount(transaction.amount)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Saldo: {:.2}",
            accounts::round_amount(self.account.balance())
        )?;
        write!(f, "{}", FOOTER)
    }
}

pub fn render_statement(account: &accounts::Account) -> String {
    Statement::new(account).to_string()
}
