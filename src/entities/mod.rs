//! Entity type definitions
//!
//! The toolkit tracks two unrelated record kinds plus the login account:
//!
//! - [`Asset`] - durable items with acquisition metadata; the export
//!   pipeline operates on these
//! - [`InventoryItem`] - consumable stock with a location; never exported
//! - [`User`] - the single login account backing authentication

pub mod asset;
pub mod item;
pub mod user;

pub use asset::Asset;
pub use item::InventoryItem;
pub use user::User;
