mod ai;
mod codes;
mod config;
mod inspector;
mod menu;
mod naming;
mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use config::Config;
use inspector::Inspector;
use menu::{Menu, MenuAction};
use naming::Lang;
use ui::UI;

#[derive(Parser, Debug)]
#[command(name = "bimcheck", version)]
#[command(about = "Check BIM file names against the ISO 19650 naming convention")]
struct Cli {
    /// File names to check, e.g. PRJ-ORG-ZZ-XX-M3-AR-0001.rvt
    #[arg(value_name = "FILENAME")]
    filenames: Vec<String>,

    /// Skip the AI commentary
    #[arg(long)]
    no_ai: bool,

    /// Print one JSON result per line instead of the report
    #[arg(long)]
    json: bool,

    /// Report language
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Gemini model id (overrides GEMINI_MODEL)
    #[arg(long, value_name = "ID")]
    model: Option<String>,

    /// Print the naming guide and exit
    #[arg(long)]
    guide: bool,

    /// Debug logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    if std::env::args().len() == 1 {
        init_logger(false);
        run_interactive_mode().await?;
        return Ok(ExitCode::SUCCESS);
    }
    run_cli_mode().await
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init()
        .ok();
}

fn build_inspector(no_ai: bool, model: Option<String>) -> Inspector {
    if no_ai {
        return Inspector::new(None);
    }
    let config = Config::from_env().with_model(model);
    if config.api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; commentary will fall back to the error message");
    }
    Inspector::new(Some(Arc::new(ai::GeminiCommentator::new(config))))
}

async fn run_cli_mode() -> Result<ExitCode> {
    let args = Cli::parse();
    init_logger(args.verbose);

    if args.guide {
        UI::print_guide(args.lang);
        return Ok(ExitCode::SUCCESS);
    }

    if args.filenames.is_empty() {
        bail!("no file name given (run without arguments for the interactive menu)");
    }
    if args.filenames.iter().any(|name| name.trim().is_empty()) {
        bail!("file names must not be blank");
    }

    let mut inspector = build_inspector(args.no_ai, args.model);
    let mut all_valid = true;

    for filename in &args.filenames {
        let result = inspector.check(filename);
        all_valid &= result.overall_valid;

        if args.json {
            inspector.annotate().await;
            if let Some(result) = inspector.current() {
                println!("{}", serde_json::to_string(result)?);
            }
            continue;
        }

        UI::section(filename);
        UI::render_result(result, args.lang);

        let spinner = inspector
            .has_commentator()
            .then(|| UI::loading("Asking the AI for a second opinion..."));
        let feedback = inspector.annotate().await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        if let Some(feedback) = feedback {
            UI::render_commentary(feedback);
        }
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_interactive_mode() -> Result<()> {
    UI::print_title();
    let mut inspector = build_inspector(false, None);

    loop {
        match Menu::show_main_menu()? {
            MenuAction::CheckFilename => handle_interactive_check(&mut inspector).await?,
            MenuAction::ShowGuide => UI::print_guide(Lang::En),
            MenuAction::Exit => {
                UI::info("Bye.");
                break;
            }
        }
    }

    Ok(())
}

async fn handle_interactive_check(inspector: &mut Inspector) -> Result<()> {
    let filename = Menu::ask_filename()?;

    UI::section(&filename);
    UI::render_result(inspector.check(&filename), Lang::En);

    let spinner = UI::loading("Asking the AI for a second opinion...");
    let feedback = inspector.annotate().await.map(str::to_string);
    spinner.finish_and_clear();

    if let Some(feedback) = feedback {
        UI::render_commentary(&feedback);
    }

    Ok(())
}
