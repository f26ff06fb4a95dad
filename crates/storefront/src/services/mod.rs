//! View-facing provider services.
//!
//! Each service owns its collections and derived state for the lifetime of
//! the process (the "browser tab"), mirrors every mutation into the
//! persistent key-value store, and converts failures into state the view
//! layer can render.

pub mod auth;
pub mod cart;
pub mod products;
pub mod profile;

pub use auth::AuthService;
pub use cart::CartService;
pub use products::ProductCatalog;
pub use profile::ProfileService;
