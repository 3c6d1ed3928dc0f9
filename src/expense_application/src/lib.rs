pub mod use_cases;

pub use use_cases::*;

#[cfg(test)]
pub(crate) mod test_support;
