pub mod http_handlers;
pub mod web_host;

pub use http_handlers::*;
pub use web_host::WebHost;

use tokio::sync::Mutex;

use crate::manager::RoundManager;
use crate::storage::KeyValueStore;

/// The one round this server tracks. Handlers hold the lock for the whole
/// operation so requests are applied one at a time, in arrival order.
pub type SharedRound = Mutex<RoundManager<Box<dyn KeyValueStore>>>;
