pub mod loading;
pub mod quiz;
pub mod results;
pub mod settings;
