use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::codes::{self, ROLE_CODES, TYPE_CODES};
use crate::naming::{
    ISO_SEGMENTS, Lang, NamingResult, SegmentRule, VALID_EXTENSIONS, ValidationSegment,
};

pub const STANDARD_URL: &str = "https://www.iso.org/standard/68078.html";

pub struct UI;

impl UI {
    pub fn print_title() {
        let banner = r#"
 _     _                _               _
| |__ (_)_ __ ___   ___| |__   ___  ___| | __
| '_ \| | '_ ` _ \ / __| '_ \ / _ \/ __| |/ /
| |_) | | | | | | | (__| | | |  __/ (__|   <
|_.__/|_|_| |_| |_|\___|_| |_|\___|\___|_|\_\
"#;
        println!("{}", banner.bright_cyan());
        println!("{}", "ISO 19650 file naming checker for Revit / Navisworks".bright_black());
        println!(
            "{}",
            "Pass filenames as arguments to check them without the menu.".bright_black()
        );
        Self::separator();
    }

    pub fn separator() {
        println!(
            "{}",
            "──────────────────────────────────────────────".bright_black()
        );
    }

    pub fn section(title: &str) {
        println!("\n{}", format!("■ {}", title).bright_white().bold());
        Self::separator();
    }

    pub fn info(message: &str) {
        println!("{}", format!("ℹ {message}").bright_blue());
    }

    pub fn loading(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(80));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(message.to_string());
        pb
    }

    pub fn render_result(result: &NamingResult, lang: Lang) {
        if result.overall_valid {
            println!(
                "{}",
                match lang {
                    Lang::En => "✓ The file name conforms to the standard.",
                    Lang::Ar => "✓ الملف مطابق للمعايير!",
                }
                .bright_green()
                .bold()
            );
        } else {
            println!(
                "{}",
                match lang {
                    Lang::En => "✗ The file name does not conform. Check the fields marked below.",
                    Lang::Ar => "✗ الملف غير مطابق للمعايير. يرجى مراجعة الحقول المشار إليها أدناه.",
                }
                .bright_red()
                .bold()
            );
            let failed = result.failed_segments().count();
            if failed > 0 {
                println!(
                    "{}",
                    format!("  {failed}/{} segment(s) failed", ISO_SEGMENTS.len()).bright_black()
                );
            }
        }

        for segment in &result.segments {
            println!("{}", Self::format_segment(segment, lang));
        }
        println!("{}", Self::format_extension(result, lang));

        if result.surplus_tokens() > 0 {
            let note = match lang {
                Lang::En => format!(
                    "  {} extra segment(s) after Number; exactly {} are expected",
                    result.surplus_tokens(),
                    ISO_SEGMENTS.len()
                ),
                Lang::Ar => format!(
                    "  {} جزء إضافي بعد الرقم؛ المطلوب {} أجزاء بالضبط",
                    result.surplus_tokens(),
                    ISO_SEGMENTS.len()
                ),
            };
            println!("{}", note.bright_yellow());
        }
    }

    pub fn render_commentary(feedback: &str) {
        Self::section("✨ AI analysis");
        println!("{feedback}");
    }

    pub fn print_guide(lang: Lang) {
        Self::section(match lang {
            Lang::En => "Quick naming guide (ISO 19650)",
            Lang::Ar => "دليل التسمية السريع (ISO 19650)",
        });
        println!(
            "{}",
            match lang {
                Lang::En => "A file name has 7 parts separated by a dash (-):",
                Lang::Ar => "يتكون اسم الملف من 7 أجزاء رئيسية مفصولة بشرطة (-):",
            }
        );
        for (index, rule) in ISO_SEGMENTS.iter().enumerate() {
            println!(
                "  {}. {} {}",
                index + 1,
                rule.label_in(lang).bold(),
                format!("{} {}", rule.description_in(lang), rule.pattern).bright_black()
            );
        }

        Self::print_code_table(ISO_SEGMENTS[4].label_in(lang), &TYPE_CODES, lang);
        Self::print_code_table(ISO_SEGMENTS[5].label_in(lang), &ROLE_CODES, lang);

        println!("\n{} {}", "Extensions:".bright_cyan(), VALID_EXTENSIONS.join(", "));
        println!("{} {}", "Standard:".bright_cyan(), STANDARD_URL);
        println!(
            "{} {}",
            "Example:".bright_cyan(),
            "PRJ-ORG-ZZ-XX-M3-AR-0001.rvt".bright_white()
        );
    }

    fn print_code_table(title: &str, table: &[(&str, &str, &str)], lang: Lang) {
        println!("\n{}", title.bright_cyan());
        for (code, en, ar) in table {
            let meaning = match lang {
                Lang::En => en,
                Lang::Ar => ar,
            };
            println!("  {} {}", code.bold(), meaning);
        }
    }

    fn format_segment(segment: &ValidationSegment, lang: Lang) -> String {
        let rule = SegmentRule::by_key(segment.key);
        let label = rule.map(|r| r.label_in(lang)).unwrap_or(segment.name);
        let value = if segment.value.is_empty() {
            "---".to_string()
        } else {
            segment.value.clone()
        };

        if segment.is_valid {
            let hint = codes::describe(segment.key, &segment.value, lang)
                .map(|meaning| format!(" ({meaning})").bright_black().to_string())
                .unwrap_or_default();
            format!("  {} {:<16} {}{}", "✓".bright_green(), label, value, hint)
        } else {
            let expected = rule
                .map(|r| r.description_in(lang))
                .unwrap_or(segment.expected_description);
            let error = segment
                .error_message
                .map(|e| e.message(lang))
                .unwrap_or_default();
            format!(
                "  {} {:<16} {} {}",
                "✗".bright_red(),
                label,
                value.bright_red().bold(),
                format!("[{error}] {expected}").red()
            )
        }
    }

    fn format_extension(result: &NamingResult, lang: Lang) -> String {
        let label = match lang {
            Lang::En => "Extension",
            Lang::Ar => "الامتداد",
        };
        let value = if result.extension.is_empty() {
            match lang {
                Lang::En => "(none)".to_string(),
                Lang::Ar => "بدون امتداد".to_string(),
            }
        } else {
            result.extension.clone()
        };

        if result.is_extension_valid {
            format!("  {} {:<16} {}", "✓".bright_green(), label, value)
        } else {
            format!(
                "  {} {:<16} {} {}",
                "✗".bright_red(),
                label,
                value.bright_red().bold(),
                match lang {
                    Lang::En => format!("must be one of {}", VALID_EXTENSIONS.join(", ")),
                    Lang::Ar => format!("يجب أن يكون أحد {}", VALID_EXTENSIONS.join(", ")),
                }
                .red()
            )
        }
    }
}
