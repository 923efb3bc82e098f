mod find;

pub use find::{find, run};
