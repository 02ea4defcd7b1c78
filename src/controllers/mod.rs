//! Controladores: validación de requests y orquestación de repositorios

pub mod asignacion_controller;
pub mod auth_controller;
pub mod dashboard_controller;
pub mod limpieza_controller;
pub mod mantenimiento_controller;
pub mod vehiculo_controller;
