pub mod events;
pub mod vault_state;

pub use events::*;
pub use vault_state::*;
