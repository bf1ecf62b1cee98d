pub mod locale;
pub mod news;
