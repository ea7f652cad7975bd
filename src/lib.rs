// Library entry exposing generator modules.
pub mod generator;
pub mod instructions;
