pub mod center;
pub mod page;

pub use center::Center;
pub use page::ConsolePage;
