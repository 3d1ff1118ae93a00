pub mod greeting;

pub use greeting::{api_greeting, root_greeting};
