pub mod app;
pub mod pie;
pub mod theme;
