mod app;
mod board;
mod hud;
mod toasts;

pub use app::SnakeApp;
