use crate::core::InputSource;
use crate::utils::error::Result;
use std::io::Read;

/// Reads the whole of standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinSource {
    fn read_input(&mut self) -> Result<String> {
        let mut buf = String::new();
        std::io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
