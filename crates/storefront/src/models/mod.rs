//! Domain models for cart, wishlist, and identity state.

pub mod cart;
pub mod user;

pub use cart::CartLine;
pub use user::{DirectoryUser, SessionUser};
