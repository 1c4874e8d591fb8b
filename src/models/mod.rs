pub mod dosing;
pub mod medication;
