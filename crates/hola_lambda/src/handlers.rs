pub mod hola;
