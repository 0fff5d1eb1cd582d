pub mod de;
pub mod inventory;
pub mod product;
pub mod stats;
pub mod store;
pub mod trend;

pub use inventory::*;
pub use product::*;
pub use stats::*;
pub use store::*;
pub use trend::*;
