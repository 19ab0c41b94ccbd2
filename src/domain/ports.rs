use crate::utils::error::Result;

/// Where the number to check comes from.
pub trait InputSource {
    fn read_input(&mut self) -> Result<String>;
}

impl InputSource for &str {
    fn read_input(&mut self) -> Result<String> {
        Ok(self.to_string())
    }
}
