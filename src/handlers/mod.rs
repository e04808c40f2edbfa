pub mod error;
pub mod extract;
pub mod root;
pub mod health;
pub mod item;

pub use error::*;
pub use extract::*;
pub use root::*;
pub use health::*;
pub use item::*;
