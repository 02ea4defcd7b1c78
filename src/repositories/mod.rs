//! Repositorios: acceso SQL a las tablas del sistema

pub mod asignacion_repository;
pub mod mantenimiento_repository;
pub mod vehiculo_repository;
