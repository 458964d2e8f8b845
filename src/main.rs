use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ghost_tab::aitool::{detect_tools, validate_tool};
use ghost_tab::git::{GitProbe, SystemGit, filter_available_branches};
use ghost_tab::outcome::{MainMenuOutcome, SelectProjectOutcome};
use ghost_tab::project::load_projects;
use ghost_tab::terminal::detect_terminals;
use ghost_tab::theme::theme_for_tool;
use ghost_tab::tui::branch_picker::BranchPicker;
use ghost_tab::tui::config_menu::ConfigMenu;
use ghost_tab::tui::confirm::ConfirmDialog;
use ghost_tab::tui::logo::Logo;
use ghost_tab::tui::main_menu::MainMenu;
use ghost_tab::tui::project_input::ProjectInput;
use ghost_tab::tui::project_select::ProjectSelect;
use ghost_tab::tui::run_model;
use ghost_tab::tui::settings::SettingsMenu;
use ghost_tab::tui::terminal_selector::TerminalSelector;
use ghost_tab::tui::tool_select::{MultiToolSelect, ToolSelect};

#[derive(Parser)]
#[command(name = "ghost-tab-tui")]
#[command(about = "Interactive TUI components for Ghost Tab", long_about = None)]
struct Cli {
    /// AI tool for theming
    #[arg(long, global = true, default_value = "claude")]
    ai_tool: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Yes/no confirmation dialog
    Confirm { message: String },

    /// Animated splash logo
    ShowLogo,

    /// Pick a project from the projects file
    SelectProject {
        #[arg(long)]
        projects_file: PathBuf,
    },

    /// Pick one installed AI tool
    SelectAiTool,

    /// Toggle a set of installed AI tools
    MultiSelectAiTool,

    /// Two-step name/path project wizard
    AddProject,

    /// Standalone display settings editor
    SettingsMenu {
        #[arg(long, default_value = "animated")]
        ghost_display: String,
        #[arg(long, default_value = "full")]
        tab_title: String,
        #[arg(long, default_value = "")]
        sound_name: String,
    },

    /// Unified project/action menu
    MainMenu {
        #[arg(long)]
        projects_file: PathBuf,
        /// Comma-separated tool ids available for cycling
        #[arg(long, default_value = "claude")]
        ai_tools: String,
        #[arg(long, default_value = "animated")]
        ghost_display: String,
        #[arg(long, default_value = "full")]
        tab_title: String,
        #[arg(long, default_value = "")]
        sound_name: String,
        #[arg(long, default_value = "")]
        update_version: String,
    },

    /// Configuration action menu
    ConfigMenu {
        #[arg(long, default_value = "")]
        terminal_name: String,
        #[arg(long, default_value = "")]
        version: String,
    },

    /// Pick or install a terminal emulator
    SelectTerminal {
        /// Currently selected terminal name
        #[arg(long, default_value = "")]
        current: String,
    },

    /// Filterable branch picker for worktree creation
    SelectBranch {
        #[arg(long)]
        project_path: String,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn emit<T: serde::Serialize>(outcome: &T) -> Result<()> {
    let json = serde_json::to_string(outcome).context("serialize outcome")?;
    println!("{json}");
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let theme = theme_for_tool(&cli.ai_tool);

    match cli.command {
        Commands::Confirm { message } => {
            let mut model = ConfirmDialog::new(&message, theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::ShowLogo => {
            let mut model = Logo::new();
            run_model(&mut model)
        }

        Commands::SelectProject { projects_file } => {
            let projects = load_projects(&projects_file)?;
            if projects.is_empty() {
                return emit(&SelectProjectOutcome::cancelled());
            }
            let mut model = ProjectSelect::new(projects, theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::SelectAiTool => {
            let mut model = ToolSelect::new(detect_tools(), theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::MultiSelectAiTool => {
            let mut model = MultiToolSelect::new(detect_tools(), &[], theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::AddProject => {
            let mut model = ProjectInput::new(theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::SettingsMenu {
            ghost_display,
            tab_title,
            sound_name,
        } => {
            let mut model = SettingsMenu::new(&ghost_display, &tab_title, &sound_name, theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::MainMenu {
            projects_file,
            ai_tools,
            ghost_display,
            tab_title,
            sound_name,
            update_version,
        } => {
            let mut projects = load_projects(&projects_file)?;
            let git = SystemGit;
            for project in &mut projects {
                project.worktrees = git.list_worktrees(&project.path);
            }

            let tools: Vec<String> = ai_tools
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            let current = validate_tool(&tools, &cli.ai_tool);

            let mut model = MainMenu::new(
                projects,
                tools,
                &current,
                &ghost_display,
                &tab_title,
                &sound_name,
                &update_version,
            );
            run_model(&mut model)?;
            match model.outcome() {
                Some(outcome) => emit(outcome),
                None => emit(&MainMenuOutcome {
                    action: "quit".to_string(),
                    name: None,
                    path: None,
                    branch: None,
                    ai_tool: model.current_tool().to_string(),
                    ghost_display: None,
                    tab_title: None,
                    sound_name: None,
                }),
            }
        }

        Commands::ConfigMenu {
            terminal_name,
            version,
        } => {
            let mut model = ConfigMenu::new(&terminal_name, &version, theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }

        Commands::SelectTerminal { current } => {
            let mut model = TerminalSelector::new(detect_terminals(), &current, theme);
            // The caller always needs parseable output, so a TTY failure
            // degrades to a cancel record instead of a hard error.
            if let Err(err) = run_model(&mut model) {
                eprintln!("failed to open terminal: {:#}", err);
            }
            emit(&model.outcome())
        }

        Commands::SelectBranch { project_path } => {
            let git = SystemGit;
            let branches = git.list_branches(&project_path);
            let main_branch = git.main_branch(&project_path);
            let worktrees = git.list_worktrees(&project_path);
            let available = filter_available_branches(&branches, &worktrees, &main_branch);
            if available.is_empty() {
                return emit(&ghost_tab::outcome::SelectBranchOutcome::cancelled());
            }
            let mut model = BranchPicker::new(available, &project_path, theme);
            run_model(&mut model)?;
            emit(&model.outcome())
        }
    }
}
