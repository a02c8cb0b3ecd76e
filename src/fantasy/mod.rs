pub mod lineup_builder;
pub mod rules;
pub mod squad_selector;
