pub mod alias;
pub mod spooler;

pub use alias::PrinterAliasMap;
pub use spooler::{CupsSpooler, PrintSpooler};
