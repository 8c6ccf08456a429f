//! Password Roast - password strength testing with a bad attitude
//!
//! Interactive menu by default; `check` and `generate` subcommands for scripts.

use inquire::{Password, PasswordDisplayMode, Select, Text};
use password_roast::{
    assess, generate_assessed, input::read_strength_level, pick_remark,
    types::StrengthLevel,
    GeneratedPassword, PasswordReport, PasswordRoastError, RemarkBook, Result,
};
use rand::rngs::OsRng;
use std::env;
use std::process;

/// Interactive menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Test,
    Generate,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 3] = [MenuChoice::Test, MenuChoice::Generate, MenuChoice::Exit];
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuChoice::Test => write!(f, "1. Test a password"),
            MenuChoice::Generate => write!(f, "2. Generate a new password"),
            MenuChoice::Exit => write!(f, "3. Exit"),
        }
    }
}

fn main() {
    // Initialize the library
    let config = match password_roast::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let book = config.load_remarks();

    if let Err(e) = run(&args, &book) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Dispatch on the command line
fn run(args: &[String], book: &RemarkBook) -> Result<()> {
    match args.first().map(String::as_str) {
        None => run_menu(book),
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some("-V") | Some("--version") => {
            println!("password-roast {}", password_roast::VERSION);
            Ok(())
        }
        Some("check") => {
            let json = args[1..].iter().any(|a| a == "--json");
            let password = args[1..]
                .iter()
                .find(|a| *a != "--json")
                .ok_or_else(|| PasswordRoastError::cli("check needs a password argument"))?;
            run_check(password, json, book)
        }
        Some("generate") => {
            let json = args[1..].iter().any(|a| a == "--json");
            let level = args[1..]
                .iter()
                .find(|a| *a != "--json")
                .ok_or_else(|| PasswordRoastError::cli("generate needs a strength level (1-10)"))?
                .parse::<StrengthLevel>()?;
            let generated = generate_assessed(level, &mut OsRng);
            if json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                println!("{}", generated.password);
            }
            Ok(())
        }
        Some(other) => Err(PasswordRoastError::cli(format!("Unknown command '{}'", other))),
    }
}

/// Scripted equivalent of the menu's test action
fn run_check(password: &str, json: bool, book: &RemarkBook) -> Result<()> {
    let report = assess(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report, book);
    }
    Ok(())
}

/// Interactive menu loop
fn run_menu(book: &RemarkBook) -> Result<()> {
    loop {
        println!();
        println!("🔐 Password Strength Tester");
        println!("═══════════════════════════");

        let choice = match Select::new("Enter your choice:", MenuChoice::ALL.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(e) => {
                let err = PasswordRoastError::from(e);
                if err.is_cancelled() {
                    println!("Exiting... Stay secure!");
                    return Ok(());
                }
                return Err(err);
            }
        };

        let outcome = match choice {
            MenuChoice::Test => test_password(book),
            MenuChoice::Generate => generate_interactive(),
            MenuChoice::Exit => {
                println!("Exiting... Stay secure!");
                return Ok(());
            }
        };

        // Backing out of a prompt returns to the menu
        match outcome {
            Err(e) if e.is_cancelled() => continue,
            other => other?,
        }
    }
}

fn test_password(book: &RemarkBook) -> Result<()> {
    let password = Password::new("Enter a password to test:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let report = assess(&password);
    display_report(&report, book);
    Ok(())
}

/// Ask for a strength level until the input parses
fn prompt_strength_level() -> Result<StrengthLevel> {
    read_strength_level(
        || Ok(Text::new("Select a strength level (1-10):").prompt()?),
        |e| println!("{}", e.user_message()),
    )
}

fn generate_interactive() -> Result<()> {
    let level = prompt_strength_level()?;
    let generated = generate_assessed(level, &mut OsRng);
    display_generated(&generated);
    Ok(())
}

fn display_report(report: &PasswordReport, book: &RemarkBook) {
    println!();
    println!("📊 Password Strength Score: {}", report.score);
    println!("💬 {}", pick_remark(book, report.score, &mut OsRng));
    println!();
    println!("⏱️  Estimated Crack Time with Brute Force:");
    for estimate in &report.crack_times {
        println!("   {}: {}", estimate.attack, estimate.formatted);
    }
}

fn display_generated(generated: &GeneratedPassword) {
    println!();
    println!("🎲 Here is your new password: {}", generated.password);
    println!("📊 Assessed strength: {}", generated.assessed);
    if !generated.meets_level() {
        println!(
            "⚠️  That scores below the requested level {}. Try a higher level.",
            generated.level
        );
    }
}

/// Print help information
fn print_help() {
    println!("🔐 Password Roast - password strength testing with a bad attitude");
    println!("══════════════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    password-roast                        # Interactive menu");
    println!("    password-roast check <PASSWORD> [--json]");
    println!("    password-roast generate <LEVEL> [--json]");
    println!();
    println!("EXAMPLES:");
    println!("    password-roast check 'Tr0ub4dor&3'    # Score and crack times");
    println!("    password-roast check hunter2 --json   # Machine-readable report");
    println!("    password-roast generate 8             # 20 characters with symbols");
    println!("    password-roast generate 5 --json      # Password, assessed score, timestamp");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PASSWORD_ROAST_REMARKS_DIR  Directory of Level_<n>_Insults.txt files");
    println!("    PASSWORD_ROAST_LOG          Log filter (default: warn, falls back to RUST_LOG)");
    println!();
    println!("STRENGTH LEVELS:");
    println!("    1-10 map to 6-24 characters; 5 and above add special symbols.");
    println!("    Any other number produces 12 characters.");
}
