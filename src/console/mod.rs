pub mod batcher;
pub mod statement;

use statement::Statement;

/// Ordered buffer of statements bound for the server console
///
/// Handlers push into this while a command runs; the caller drains it into
/// the server's command input once the command has completed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Console {
    statements: Vec<Statement>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn extend(&mut self, statements: impl IntoIterator<Item = Statement>) {
        self.statements.extend(statements);
    }

    pub fn info(&mut self, target: &str, text: impl Into<String>) {
        self.push(Statement::info(target, text));
    }

    pub fn say(&mut self, text: impl Into<String>) {
        self.push(Statement::Say(text.into()));
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn lines(&self) -> Vec<String> {
        self.statements.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
