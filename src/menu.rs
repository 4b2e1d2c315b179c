use std::fmt;

use anyhow::Result;
use inquire::validator::{StringValidator, Validation};
use inquire::{Select, Text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    CheckFilename,
    ShowGuide,
    Exit,
}

pub struct Menu;

#[derive(Clone)]
struct MenuChoice {
    label: &'static str,
    action: MenuAction,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Clone)]
struct NotBlank;

impl StringValidator for NotBlank {
    fn validate(&self, input: &str) -> Result<Validation, inquire::CustomUserError> {
        if input.trim().is_empty() {
            Ok(Validation::Invalid("Enter a file name".into()))
        } else {
            Ok(Validation::Valid)
        }
    }
}

impl Menu {
    pub fn show_main_menu() -> Result<MenuAction> {
        let choices = vec![
            MenuChoice {
                label: "Check a file name",
                action: MenuAction::CheckFilename,
            },
            MenuChoice {
                label: "Show naming guide",
                action: MenuAction::ShowGuide,
            },
            MenuChoice {
                label: "Exit",
                action: MenuAction::Exit,
            },
        ];

        let selected = Select::new("What would you like to do?", choices)
            .prompt()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        Ok(selected.action)
    }

    /// Full file name including the extension.
    pub fn ask_filename() -> Result<String> {
        Text::new("File name (with extension):")
            .with_placeholder("PRJ-ORG-ZZ-XX-M3-AR-0001.rvt")
            .with_validator(NotBlank)
            .prompt()
            .map_err(|e| anyhow::anyhow!(e.to_string()))
    }
}
