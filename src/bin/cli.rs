use chrono::{Datelike, Local};
use clap::Parser;
use course_scheduler::meeting::{code_for_weekday, weekday_for_code};
use course_scheduler::table::{LONG_HEADERS, SHORT_HEADERS, render_text_table, rows_to_dataframe};
use course_scheduler::{Activity, Scheduler, SchedulerConfig, init_logging};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive course schedule builder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Course catalog file (one comma-delimited course per line).
    #[arg(short, long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Config file; defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial schedule title.
    #[arg(long)]
    title: Option<String>,
}

fn render_rows<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    match rows_to_dataframe(headers, rows) {
        Ok(df) => render_text_table(&df),
        Err(e) => format!("Unable to render table: {e}"),
    }
}

fn print_schedule(scheduler: &Scheduler) {
    println!("{}", scheduler.title());
    println!("{}", render_rows(&SHORT_HEADERS, &scheduler.schedule_view()));
}

fn print_activities(activities: &[&Activity]) {
    let rows: Vec<_> = activities.iter().map(|a| a.short_display()).collect();
    println!("{}", render_rows(&SHORT_HEADERS, &rows));
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  catalog                            Show the course catalog\n  show                               Show the schedule\n  full                               Show the schedule with all details\n  add <name> <section>               Add a catalog course to the schedule\n  event <days> <start> <end> <repeat> <title...> [| <details...>]\n                                     Add an event (times as HHMM, repeat 1-4)\n  remove <index>                     Remove the activity at a schedule position\n  reset                              Clear the schedule\n  title [text...]                    Rename the schedule\n  today                              Show activities meeting today\n  on <day>                           Show activities meeting on a day (M T W H F S U)\n  export [path]                      Write the schedule to a file\n  quit|exit                          Exit"
    );
}

fn parse_time(value: &str, label: &str) -> Option<i32> {
    match value.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("Invalid {label} (expected HHMM)");
            None
        }
    }
}

fn add_event(scheduler: &mut Scheduler, rest: &str) {
    let (head, details) = match rest.split_once('|') {
        Some((head, details)) => (head, details.trim()),
        None => (rest, ""),
    };
    let mut parts = head.split_whitespace();
    let (Some(days), Some(start_s), Some(end_s), Some(repeat_s)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        println!("Usage: event <days> <start> <end> <repeat> <title...> [| <details...>]");
        return;
    };
    let title = parts.collect::<Vec<_>>().join(" ");
    let Some(start) = parse_time(start_s, "start time") else {
        return;
    };
    let Some(end) = parse_time(end_s, "end time") else {
        return;
    };
    let repeat: i32 = match repeat_s.parse() {
        Ok(v) => v,
        Err(_) => {
            println!("Invalid weekly repeat");
            return;
        }
    };
    match scheduler.add_event(&title, days, start, end, repeat, details) {
        Ok(()) => {
            println!("Added event {title}.");
            print_schedule(scheduler);
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn run_repl(mut scheduler: Scheduler, export_path: PathBuf) {
    println!("Course Scheduler (CLI) - type 'help' for commands\n");
    println!("{}", render_rows(&SHORT_HEADERS, &scheduler.course_catalog_view()));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        let mut parts = rest.split_whitespace();

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "catalog" => {
                println!("{}", render_rows(&SHORT_HEADERS, &scheduler.course_catalog_view()));
            }
            "show" => print_schedule(&scheduler),
            "full" => {
                println!("{}", scheduler.title());
                println!("{}", render_rows(&LONG_HEADERS, &scheduler.full_schedule_view()));
            }
            "add" => match (parts.next(), parts.next()) {
                (Some(name), Some(section)) => match scheduler.add_course(name, section) {
                    Ok(true) => {
                        println!("Added {name} to schedule.");
                        print_schedule(&scheduler);
                    }
                    Ok(false) => println!("Course {name}-{section} not found in catalog."),
                    Err(e) => println!("Error: {e}"),
                },
                _ => println!("Usage: add <name> <section>"),
            },
            "event" => add_event(&mut scheduler, rest),
            "remove" => match parts.next() {
                Some(idx_s) => match idx_s.parse::<usize>() {
                    Ok(idx) if scheduler.remove_activity(idx) => {
                        println!("Removed activity {idx}.");
                        print_schedule(&scheduler);
                    }
                    _ => println!("No activity at position {idx_s}."),
                },
                None => println!("Usage: remove <index>"),
            },
            "reset" => {
                scheduler.reset_schedule();
                println!("Schedule cleared.");
            }
            "title" => match scheduler.set_title(Some(rest)) {
                Ok(()) => println!("Schedule title set to '{}'.", scheduler.title()),
                Err(e) => println!("Error: {e}"),
            },
            "today" => {
                let weekday = Local::now().date_naive().weekday();
                println!("Today ({})", code_for_weekday(weekday));
                print_activities(&scheduler.activities_on(weekday));
            }
            "on" => match parts.next().and_then(|d| d.chars().next()).and_then(weekday_for_code) {
                Some(weekday) => print_activities(&scheduler.activities_on(weekday)),
                None => println!("Usage: on <M|T|W|H|F|S|U>"),
            },
            "export" => {
                let path = parts.next().map(PathBuf::from).unwrap_or_else(|| export_path.clone());
                match scheduler.export_schedule(&path) {
                    Ok(()) => println!("Schedule exported to {}", path.display()),
                    Err(e) => println!("The file cannot be saved: {e}"),
                }
            }
            _ => println!("Unknown command '{cmd}'. Type 'help' for commands."),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = match SchedulerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(catalog_path) = cli.catalog.or(config.catalog_path) else {
        eprintln!("No course catalog given; pass --catalog <PATH> or set catalog_path in the config file.");
        return ExitCode::FAILURE;
    };

    let mut scheduler = match Scheduler::from_catalog_file(&catalog_path) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            eprintln!("Cannot find file {}: {e}", catalog_path.display());
            return ExitCode::FAILURE;
        }
    };

    let title = cli.title.unwrap_or(config.schedule_title);
    if let Err(e) = scheduler.set_title(Some(&title)) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    run_repl(scheduler, config.export_path);
    ExitCode::SUCCESS
}
