pub mod generate;
pub mod sales;
pub mod settings;
