use crate::core::checker;
use crate::domain::model::Verdict;
use crate::domain::ports::InputSource;
use crate::utils::error::{CheckError, Result};

pub struct CheckEngine<S: InputSource> {
    source: S,
}

impl<S: InputSource> CheckEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&mut self) -> Result<Verdict> {
        let input = self.source.read_input()?;
        let mut tokens = input.split_whitespace();

        let token = tokens.next().ok_or_else(|| {
            tracing::debug!("No input token");
            CheckError::malformed("")
        })?;
        let ignored = tokens.count();
        if ignored > 0 {
            tracing::debug!("Ignoring {} trailing token(s)", ignored);
        }

        let value = checker::parse_token(token)?;
        let number = checker::validate_range(value)?;
        let digits = checker::decompose(number)?;
        let verdict = Verdict::from(digits.is_palindrome());

        match serde_json::to_string(&(number, digits, verdict)) {
            Ok(record) => tracing::debug!("Checked {}", record),
            Err(e) => tracing::warn!("Could not serialize check record: {}", e),
        }

        Ok(verdict)
    }
}
