//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `clubtask_core` linkage and slot-store bootstrap.
//! - Print the dashboard roster with per-member stats.
//!
//! Usage: `clubtask_cli [DB_PATH] [LOG_DIR]`. Without `DB_PATH` an in-memory
//! store is used, so only the default roster is shown.

use clubtask_core::db::{open_db, open_db_in_memory};
use clubtask_core::{
    core_version, default_log_level, init_logging, local_today, ClubService,
    SlotMemberRepository, SlotTaskRepository, SqliteSlotStore,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("clubtask_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = args.get(1) {
        init_logging(default_log_level(), log_dir)?;
    }

    let conn = match args.first() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let store = SqliteSlotStore::new(&conn);
    let club = ClubService::new(
        SlotMemberRepository::new(&store),
        SlotTaskRepository::new(&store),
    );

    println!("clubtask_core version={}", core_version());
    for entry in club.roster(local_today())? {
        let stats = entry.stats;
        println!(
            "{:<15} {:<16} {:<10} total={} completed={} overdue={} win_rate={}%",
            entry.member.id,
            entry.member.name,
            entry.member.team,
            stats.total,
            stats.completed,
            stats.overdue,
            stats.win_rate
        );
    }
    Ok(())
}
