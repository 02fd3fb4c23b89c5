pub mod builders;
pub mod fake_executor;

pub use builders::BatchBuilder;
pub use fake_executor::{FakeExecutor, FakeOutcome};
