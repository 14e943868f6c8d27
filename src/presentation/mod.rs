// Presentation layer - Terminal input and output
pub mod commands;
pub mod screen;
pub mod text_chart;
