pub mod clean;
pub mod translator;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use translator::QueryTranslator;
