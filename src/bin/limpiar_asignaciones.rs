//! Herramienta de terminal para limpiar asignaciones finalizadas antiguas.
//!
//! Uso:
//!     limpiar-asignaciones --semanas=3
//!     limpiar-asignaciones --semanas=4 --confirmar
//!
//! Sin --confirmar solo muestra lo que se eliminaría.

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use dotenvy::dotenv;
use std::io::{self, Write};

use gescoches_backend::config::environment::EnvironmentConfig;
use gescoches_backend::database;
use gescoches_backend::services::limpieza_service::LimpiezaService;

#[derive(Parser, Debug)]
#[command(
    name = "limpiar-asignaciones",
    about = "Limpia asignaciones finalizadas de hace más de N semanas"
)]
struct Args {
    /// Número de semanas a partir de las cuales se eliminan asignaciones
    #[arg(long, default_value_t = 3)]
    semanas: i64,

    /// Confirma la eliminación. Sin este flag, solo muestra lo que se eliminaría
    #[arg(long)]
    confirmar: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    if args.semanas < 1 {
        bail!("El número de semanas debe ser al menos 1");
    }

    let config = EnvironmentConfig::from_env()?;
    let pool = database::create_pool(&config.database_url).await?;
    let service = LimpiezaService::new(pool);

    let resumen = service.previsualizar(args.semanas).await?;

    if resumen.total == 0 {
        println!(
            "{}",
            format!(
                "✅ No hay asignaciones para eliminar (anterior a {})",
                resumen.fecha_limite.format("%d/%m/%Y")
            )
            .green()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "⚠️  Se encontraron {} asignaciones finalizadas hace más de {} semanas",
            resumen.total, resumen.semanas
        )
        .yellow()
    );
    println!(
        "   Fecha límite: {}",
        resumen.fecha_limite.format("%d/%m/%Y %H:%M")
    );
    println!("   Asignaciones:");

    for asignacion in &resumen.muestra {
        println!(
            "   - {} ({}) finalizada el {}",
            asignacion.matricula,
            asignacion.cliente,
            asignacion.fecha_fin.format("%d/%m/%Y")
        );
    }

    let mostradas = resumen.muestra.len() as i64;
    if resumen.total > mostradas {
        println!("   ... y {} más", resumen.total - mostradas);
    }

    if !args.confirmar {
        println!();
        println!("{}", "⚠️  Usa --confirmar para ejecutar la eliminación".yellow());
        println!("   Comando: limpiar-asignaciones --semanas={} --confirmar", args.semanas);
        return Ok(());
    }

    print!("\n¿Eliminar {} asignaciones? (s/n): ", resumen.total);
    io::stdout().flush()?;

    let mut respuesta = String::new();
    io::stdin().read_line(&mut respuesta)?;

    if respuesta.trim().to_lowercase() != "s" {
        println!("{}", "Operación cancelada".yellow());
        return Ok(());
    }

    let (_, eliminadas) = service.ejecutar(args.semanas).await?;

    println!(
        "{}",
        format!("✅ Se eliminaron {} asignaciones exitosamente", eliminadas).green()
    );

    Ok(())
}
