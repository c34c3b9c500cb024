pub mod todo;
pub mod user;
pub mod view;

pub use todo::*;
pub use user::*;
pub use view::*;
