use colored::*;
use futures::FutureExt;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const DOTS_WIDTH: usize = 72;

/// Applies every migration in order against the given database URL,
/// printing one status line per migration.
pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    let schema_manager = SchemaManager::new(&db);
    let migrations = <migration::Migrator as MigratorTrait>::migrations();

    println!("Applying {} migration(s)...", migrations.len());
    for migration in migrations {
        apply_one(&schema_manager, migration).await;
    }
}

async fn apply_one(schema_manager: &SchemaManager<'_>, migration: Box<dyn MigrationTrait>) {
    let label = migration.name().bold();
    let dots = ".".repeat(DOTS_WIDTH.saturating_sub(migration.name().len()));
    print!("  {label} {dots} ");
    io::stdout().flush().unwrap();

    let start = Instant::now();
    let outcome = std::panic::AssertUnwindSafe(migration.up(schema_manager))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(())) => {
            let elapsed = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {elapsed}", "ok".green());
        }
        Ok(Err(e)) => {
            println!("{}", "failed".red());
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "panicked".red());
            std::process::exit(1);
        }
    }
}
