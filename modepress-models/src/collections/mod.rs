//! The built-in Modepress collections.

mod categories;
mod comments;
mod posts;
mod renders;
mod todo;

pub use categories::Categories;
pub use comments::Comments;
pub use posts::Posts;
pub use renders::Renders;
pub use todo::Todo;
