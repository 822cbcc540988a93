mod duplicate_finder;
mod fingerprint;
mod recycle;
mod scanner;

pub use duplicate_finder::DuplicateFinder;
pub use fingerprint::{AverageHasher, Fingerprinter};
pub use recycle::{LedgerEntry, RecycleBin, RecycleError};
pub use scanner::Scanner;
