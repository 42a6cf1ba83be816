use std::error::Error;

pub mod env;
pub mod fixture;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
#[cfg(test)]
mod tests;

pub trait Config {
    fn read(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;
}
