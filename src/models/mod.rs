//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod asignacion;
pub mod mantenimiento;
pub mod vehiculo;
