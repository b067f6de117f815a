pub mod invariants;
pub mod reports;
pub mod session;
pub mod tester;

pub use tester::{LogicTester, ScenarioResult};
