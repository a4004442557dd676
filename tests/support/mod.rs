// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper, so dead_code warnings are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod stores;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use stores::*;
