pub mod core;
pub mod poller;

pub use poller::{PollingHandle, start_polling};
