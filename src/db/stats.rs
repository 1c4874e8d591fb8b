use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL MEDICATIONS
    //
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM medications", [], |row| row.get(0))?;
    println!(
        "{}• Medications:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DUPLICATED NAMES (ambiguous for `dose --med`)
    //
    let duplicated: i64 = conn.query_row(
        "SELECT COUNT(*) FROM (SELECT name FROM medications GROUP BY name HAVING COUNT(*) > 1)",
        [],
        |row| row.get(0),
    )?;
    if duplicated > 0 {
        println!(
            "{}• Duplicated names:{} {}{}{}",
            CYAN, RESET, YELLOW, duplicated, RESET
        );
    }

    //
    // 4) LAST LOG ENTRY
    //
    let last_log: Option<String> = conn
        .query_row(
            "SELECT date || ' ' || operation FROM log ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last_log.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last operation:{} {}", CYAN, RESET, fmt_last);

    println!();
    Ok(())
}
