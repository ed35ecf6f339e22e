pub mod app;
pub mod client;
pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
