/// A command saved inside a shortcut, without the chat prefix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedCommand {
    pub verb: String,
    pub args: Vec<String>,
}

impl SavedCommand {
    pub fn new(verb: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            verb: verb.into(),
            args,
        }
    }
}

impl std::fmt::Display for SavedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
