pub mod health;
pub mod ready;
pub mod root;
pub mod item;
pub mod error;

pub use health::*;
pub use ready::*;
pub use root::*;
pub use item::*;
pub use error::*;
