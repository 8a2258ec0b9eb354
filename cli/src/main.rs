mod chart;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use studytime_core::{
    goal_text, open_file_service, parse_entry, today, FileStudyService, ProgressView, Submission,
    GOAL_KEYS, NO_GOAL_PROMPT, RECORD_KEYS,
};

#[derive(Parser)]
#[command(name = "studytime")]
#[command(about = "Log study sessions and track a weekly goal", long_about = None)]
struct Cli {
    /// Directory holding records.json and goal.json (default: ~/.studytime)
    #[arg(long, global = true, env = "STUDYTIME_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log a study session (usage: add Kanji drills hours:1.5 date:yesterday)
    Add {
        /// Subject followed by hours:<h> and an optional date:<d> (default today)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List all sessions with their positions
    List,
    /// Delete the session at a position shown by `list`
    Delete { position: usize },
    /// Show the goal, or set it (usage: goal Pass JLPT N2 hours:10)
    Goal {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show this week's progress against the goal
    Progress,
    /// Show total hours per week
    Chart,
    /// Open the Terminal User Interface
    Tui,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Data directory override: {:?}", cli.data_dir);
    let service = open_file_service(cli.data_dir)?;

    match cli.command {
        Some(Commands::Add { args }) => add(&service, &args)?,
        Some(Commands::List) => {
            chart::show_records(&service.record_rows()?);
        }
        Some(Commands::Delete { position }) => match service.delete_record(position)? {
            Some(r) => println!("Deleted: {} {} ({} h)", r.date, r.subject, r.hours),
            None => {
                log::debug!("Delete of position {} ignored", position);
                println!("No session at position {}.", position);
            }
        },
        Some(Commands::Goal { args }) => goal(&service, &args)?,
        Some(Commands::Progress) => {
            if let Some(goal) = service.goal()? {
                println!("{}", goal_text(&goal));
            }
            let view = ProgressView::from_progress(&service.progress(today())?);
            chart::show_progress(&view);
        }
        Some(Commands::Chart) => {
            chart::show_weekly(&service.weekly_chart()?);
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}

fn add(service: &FileStudyService, args: &[String]) -> Result<()> {
    let entry = match parse_entry(args, RECORD_KEYS) {
        Ok(entry) => entry,
        Err(e) => {
            log::debug!("Entry line rejected: {}", e);
            println!("Error: {}", e);
            return Ok(());
        }
    };

    match service.add_record(&entry.into_record_form(), today())? {
        Submission::Accepted(r) => {
            println!("Session logged: {} ({} h)", r.subject, r.hours);
            println!("  Date: {}", r.date);
        }
        Submission::Rejected(e) => println!("Error: {}", e),
    }
    Ok(())
}

fn goal(service: &FileStudyService, args: &[String]) -> Result<()> {
    if args.is_empty() {
        match service.goal()? {
            Some(goal) => println!("{}", goal_text(&goal)),
            None => println!("{}", NO_GOAL_PROMPT),
        }
        return Ok(());
    }

    let entry = match parse_entry(args, GOAL_KEYS) {
        Ok(entry) => entry,
        Err(e) => {
            log::debug!("Goal line rejected: {}", e);
            println!("Error: {}", e);
            return Ok(());
        }
    };

    match service.set_goal(&entry.into_goal_form())? {
        Submission::Accepted(goal) => {
            println!("Goal set. {}", goal_text(&goal));
            let view = ProgressView::from_progress(&service.progress(today())?);
            chart::show_progress(&view);
        }
        Submission::Rejected(e) => println!("Error: {}", e),
    }
    Ok(())
}
