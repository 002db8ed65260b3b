//! Interactive intake REPL (Read-Eval-Print Loop).
//!
//! Holds at most one open matter. `describe` opens it; the hint commands
//! re-classify it in place, keeping its id and evidence.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::{Local, NaiveDate};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use wayfinder_domain::{KeyDate, MatterStatus, PartyType, Provenance, UrgencyLevel};
use wayfinder_router::{JourneyContext, JourneyTracker};
use wayfinder_sdk::{MatterInput, MatterSession, Wayfinder};

/// Run the interactive REPL.
pub fn run_repl(engine: &Wayfinder, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Wayfinder intake - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session: Option<MatterSession<'_>> = None;

    loop {
        let prompt = if session.is_some() {
            "wayfinder (matter)> "
        } else {
            "wayfinder> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, engine, &mut session, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();
    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Describe(String),
    Amount(f64),
    Domain(String),
    Jurisdiction(String),
    Urgency(UrgencyLevel),
    Party(PartyType),
    KeyDate(NaiveDate, String),
    Show,
    Route { appeal: bool, judicial_review: bool },
    Evidence(PathBuf, Provenance),
    Timeline,
    Upcoming(u64),
    Generate,
    Progress,
    Close,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let cmd = match head {
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "describe" => ReplCommand::Describe(required(rest, "describe <text>")?.to_string()),
        "amount" => {
            let amount = required(rest, "amount <dollars>")?
                .trim_start_matches('$')
                .replace(',', "")
                .parse::<f64>()
                .map_err(|_| CliError::InvalidInput(format!("Invalid amount: {}", rest)))?;
            ReplCommand::Amount(crate::commands::classify::validate_amount(amount)?)
        }
        "domain" => ReplCommand::Domain(required(rest, "domain <hint>")?.to_string()),
        "jurisdiction" => ReplCommand::Jurisdiction(required(rest, "jurisdiction <hint>")?.to_string()),
        "urgency" => {
            let level = required(rest, "urgency low|normal|high|critical")?;
            ReplCommand::Urgency(
                UrgencyLevel::parse(level)
                    .ok_or_else(|| CliError::InvalidInput(format!("Invalid urgency: {}", level)))?,
            )
        }
        "party" => {
            let kind = required(rest, "party <type>")?;
            ReplCommand::Party(
                PartyType::parse(kind)
                    .ok_or_else(|| CliError::InvalidInput(format!("Invalid party type: {}", kind)))?,
            )
        }
        "date" => {
            let usage = "date <YYYY-MM-DD> <label>";
            let (date, label) = required(rest, usage)?
                .split_once(char::is_whitespace)
                .ok_or_else(|| CliError::InvalidInput(format!("Usage: {}", usage)))?;
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| CliError::InvalidInput(format!("Invalid date {}: {}", date, e)))?;
            ReplCommand::KeyDate(date, label.trim().to_string())
        }
        "show" => ReplCommand::Show,
        "route" => match rest {
            "" => ReplCommand::Route { appeal: false, judicial_review: false },
            "appeal" => ReplCommand::Route { appeal: true, judicial_review: false },
            "jr" | "review" => ReplCommand::Route { appeal: false, judicial_review: true },
            other => {
                return Err(CliError::InvalidInput(format!(
                    "Unknown route mode: {}. Use 'appeal' or 'jr'.",
                    other
                )))
            }
        },
        "evidence" => {
            let mut parts = required(rest, "evidence <path> [provenance]")?.split_whitespace();
            let path = parts.next().map(PathBuf::from).unwrap_or_default();
            let provenance = match parts.next() {
                Some(tag) => Provenance::parse(tag)
                    .ok_or_else(|| CliError::InvalidInput(format!("Invalid provenance: {}", tag)))?,
                None => Provenance::Original,
            };
            ReplCommand::Evidence(path, provenance)
        }
        "timeline" => ReplCommand::Timeline,
        "upcoming" => ReplCommand::Upcoming(if rest.is_empty() {
            30
        } else {
            rest.parse()
                .map_err(|_| CliError::InvalidInput(format!("Invalid number of days: {}", rest)))?
        }),
        "generate" => ReplCommand::Generate,
        "progress" => ReplCommand::Progress,
        "close" => ReplCommand::Close,
        _ => {
            return Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                head
            )))
        }
    };

    Ok(cmd)
}

fn required<'l>(rest: &'l str, usage: &str) -> Result<&'l str> {
    if rest.is_empty() {
        Err(CliError::InvalidInput(format!("Usage: {}", usage)))
    } else {
        Ok(rest)
    }
}

/// Execute a REPL command.
fn execute_repl_command<'a>(
    cmd: ReplCommand,
    engine: &'a Wayfinder,
    session: &mut Option<MatterSession<'a>>,
    formatter: &Formatter,
) -> Result<()> {
    if let ReplCommand::Describe(text) = cmd {
        let matter = engine.open_matter(MatterInput::new(text));
        println!("{}", formatter.format_classification(matter.classification())?);
        *session = Some(matter);
        return Ok(());
    }

    if cmd == ReplCommand::Progress && session.is_none() {
        let progress = JourneyTracker::new()
            .build_progress(&JourneyContext::new(MatterStatus::Intake, 0, false));
        println!("{}", formatter.format_progress(&progress)?);
        return Ok(());
    }

    let matter = session.as_mut().ok_or(CliError::NoMatter)?;
    match cmd {
        ReplCommand::Amount(amount) => revise(matter, formatter, |i| i.dispute_amount = Some(amount))?,
        ReplCommand::Domain(hint) => revise(matter, formatter, |i| i.domain_hint = Some(hint))?,
        ReplCommand::Jurisdiction(hint) => {
            revise(matter, formatter, |i| i.jurisdiction_hint = Some(hint))?
        }
        ReplCommand::Urgency(level) => revise(matter, formatter, |i| i.urgency = Some(level))?,
        ReplCommand::Party(party) => revise(matter, formatter, |i| {
            if !i.party_types.contains(&party) {
                i.party_types.push(party);
            }
        })?,
        ReplCommand::KeyDate(date, label) => {
            revise(matter, formatter, |i| i.key_dates.push(KeyDate::new(label, date)))?
        }
        ReplCommand::Show => {
            println!("{}", formatter.format_classification(matter.classification())?);
        }
        ReplCommand::Route { appeal, judicial_review } => {
            let forum = matter.route_with(appeal, judicial_review)?;
            println!("{}", formatter.format_forum(&forum)?);
        }
        ReplCommand::Evidence(path, provenance) => {
            let item = matter.add_evidence_file(&path, provenance)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Indexed {} (credibility {:.2})",
                    item.filename(),
                    item.credibility()
                ))
            );
        }
        ReplCommand::Timeline => {
            println!("{}", formatter.format_timeline(&matter.timeline())?);
        }
        ReplCommand::Upcoming(days) => {
            let today = Local::now().date_naive();
            println!("{}", formatter.format_timeline(&matter.upcoming(today, days))?);
        }
        ReplCommand::Generate => {
            let output = matter.generate_documents()?;
            println!("{}", formatter.format_documents(&output)?);
        }
        ReplCommand::Progress => {
            println!("{}", formatter.format_progress(&matter.progress())?);
        }
        ReplCommand::Close => {
            matter.close();
            println!("{}", formatter.success(&format!("Closed matter {}", matter.classification().id)));
            *session = None;
        }
        ReplCommand::Exit | ReplCommand::Help | ReplCommand::Describe(_) => {}
    }

    Ok(())
}

/// Apply a change to the intake data and re-classify.
fn revise(
    matter: &mut MatterSession<'_>,
    formatter: &Formatter,
    change: impl FnOnce(&mut MatterInput),
) -> Result<()> {
    let mut input = matter.input().clone();
    change(&mut input);
    let classification = matter.reclassify(input);
    println!("{}", formatter.format_classification(classification)?);
    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let wayfinder_dir = home.join(".wayfinder");
    std::fs::create_dir_all(&wayfinder_dir)?;
    Ok(wayfinder_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  describe <text>               - Open a new matter from a description");
    println!("  amount <dollars>              - Set the amount in dispute");
    println!("  domain <hint>                 - Set a domain hint (e.g., tenant)");
    println!("  jurisdiction <hint>           - Set a jurisdiction hint (e.g., federal)");
    println!("  urgency <level>               - low|normal|high|critical");
    println!("  party <type>                  - Add a party (e.g., landlord, insurer)");
    println!("  date <YYYY-MM-DD> <label>     - Add a key date");
    println!("  show                          - Show the classification");
    println!("  route [appeal|jr]             - Recommend a forum");
    println!("  evidence <path> [provenance]  - Index an evidence file");
    println!("  timeline                      - Key dates and dated evidence");
    println!("  upcoming [days]               - Events in the next N days (default: 30)");
    println!("  generate                      - Generate the document package");
    println!("  progress                      - Show journey progress");
    println!("  close                         - Close the matter");
    println!("  help, ?                       - Show this help");
    println!("  exit, quit, q                 - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> Formatter {
        Formatter::new(crate::config::OutputFormat::Json, false)
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_repl_command("q").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(
            parse_repl_command("describe my landlord  kept the deposit").unwrap(),
            ReplCommand::Describe("my landlord  kept the deposit".to_string())
        );
        assert_eq!(parse_repl_command("amount $12,500").unwrap(), ReplCommand::Amount(12_500.0));
        assert_eq!(
            parse_repl_command("route jr").unwrap(),
            ReplCommand::Route { appeal: false, judicial_review: true }
        );
        assert_eq!(parse_repl_command("upcoming").unwrap(), ReplCommand::Upcoming(30));
    }

    #[test]
    fn test_parse_date_and_evidence() {
        assert_eq!(
            parse_repl_command("date 2024-05-02 Lockout notice").unwrap(),
            ReplCommand::KeyDate(
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                "Lockout notice".to_string()
            )
        );
        assert_eq!(
            parse_repl_command("evidence photo.jpg screenshot").unwrap(),
            ReplCommand::Evidence(PathBuf::from("photo.jpg"), Provenance::Screenshot)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_repl_command("describe").is_err());
        assert!(parse_repl_command("amount -5").is_err());
        assert!(parse_repl_command("urgency someday").is_err());
        assert!(parse_repl_command("date 2024-13-01 bad").is_err());
        assert!(parse_repl_command("route sideways").is_err());
        assert!(parse_repl_command("party").is_err());
        assert!(parse_repl_command("party alien").is_err());
        assert!(parse_repl_command("frobnicate").is_err());
    }

    #[test]
    fn test_commands_need_open_matter() {
        let engine = Wayfinder::ontario();
        let mut session = None;
        let result = execute_repl_command(ReplCommand::Show, &engine, &mut session, &formatter());
        assert!(matches!(result, Err(CliError::NoMatter)));
    }

    #[test]
    fn test_progress_before_describe() {
        let engine = Wayfinder::ontario();
        let mut session = None;
        execute_repl_command(ReplCommand::Progress, &engine, &mut session, &formatter()).unwrap();
        assert!(session.is_none());
    }

    #[test]
    fn test_party_command_adds_once() {
        assert_eq!(
            parse_repl_command("party Insurance Company").unwrap(),
            ReplCommand::Party(PartyType::Insurer)
        );

        let engine = Wayfinder::ontario();
        let f = formatter();
        let mut session = None;
        execute_repl_command(
            ReplCommand::Describe("My insurer denied my claim".into()),
            &engine,
            &mut session,
            &f,
        )
        .unwrap();
        for _ in 0..2 {
            execute_repl_command(ReplCommand::Party(PartyType::Insurer), &engine, &mut session, &f)
                .unwrap();
        }

        let matter = session.as_ref().unwrap();
        assert_eq!(matter.classification().party_types, vec![PartyType::Insurer]);
    }

    #[test]
    fn test_intake_flow() {
        let engine = Wayfinder::ontario();
        let f = formatter();
        let mut session = None;

        execute_repl_command(
            ReplCommand::Describe("My landlord kept my deposit".into()),
            &engine,
            &mut session,
            &f,
        )
        .unwrap();
        let id = session.as_ref().unwrap().classification().id;

        execute_repl_command(ReplCommand::Amount(1800.0), &engine, &mut session, &f).unwrap();
        let matter = session.as_ref().unwrap();
        assert_eq!(matter.classification().id, id);
        assert_eq!(matter.classification().dispute_amount, Some(1800.0));

        execute_repl_command(ReplCommand::Generate, &engine, &mut session, &f).unwrap();
        execute_repl_command(ReplCommand::Close, &engine, &mut session, &f).unwrap();
        assert!(session.is_none());
    }
}
