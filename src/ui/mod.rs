pub mod chat;
pub mod detail;
pub mod header;
pub mod landing;
pub mod layout;
pub mod quiz;
pub mod table;
pub mod trends;

pub use chat::draw_chat;
pub use detail::draw_detail;
pub use header::{draw_header, draw_help};
pub use landing::draw_landing;
pub use quiz::{draw_quiz, draw_quiz_menu, draw_quiz_summary};
pub use table::draw_table;
pub use trends::draw_trends;
