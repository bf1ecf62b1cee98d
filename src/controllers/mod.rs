pub mod health;
pub mod locales;
pub mod news;
