use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::Serialize;

/// Extensions accepted for coordinated model files (Revit / Navisworks).
pub const VALID_EXTENSIONS: [&str; 4] = [".rvt", ".nwc", ".nwd", ".nwf"];

/// Report language for labels and descriptions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

/// One positional field of the ISO 19650 container name.
#[derive(Debug)]
pub struct SegmentRule {
    pub key: &'static str,
    pub label: &'static str,
    pub label_ar: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
    pub description_ar: &'static str,
}

impl SegmentRule {
    pub fn label_in(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.label,
            Lang::Ar => self.label_ar,
        }
    }

    pub fn description_in(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.description,
            Lang::Ar => self.description_ar,
        }
    }

    pub fn by_key(key: &str) -> Option<&'static SegmentRule> {
        ISO_SEGMENTS.iter().find(|rule| rule.key == key)
    }
}

/// Fixed rule table. Order is position in the filename.
pub static ISO_SEGMENTS: [SegmentRule; 7] = [
    SegmentRule {
        key: "project",
        label: "Project",
        label_ar: "المشروع",
        pattern: "^[A-Z0-9]{2,10}$",
        description: "Project code (2-10 characters)",
        description_ar: "رمز المشروع (2-10 أحرف)",
    },
    SegmentRule {
        key: "originator",
        label: "Originator",
        label_ar: "المنشئ",
        pattern: "^[A-Z0-9]{3,6}$",
        description: "Originating organisation code (3-6 characters)",
        description_ar: "رمز الشركة المنشئة (3-6 أحرف)",
    },
    SegmentRule {
        key: "volume",
        label: "Volume/System",
        label_ar: "المجلد/النظام",
        pattern: "^[A-Z0-9]{2}$",
        description: "Zone or system code (2 characters)",
        description_ar: "رمز المنطقة أو النظام (حرفان)",
    },
    SegmentRule {
        key: "level",
        label: "Level/Location",
        label_ar: "المستوى/الموقع",
        pattern: "^[A-Z0-9]{2}$",
        description: "Floor or location code (2 characters)",
        description_ar: "رمز الطابق أو الموقع (حرفان)",
    },
    SegmentRule {
        key: "type",
        label: "Type",
        label_ar: "النوع",
        // M3 is the standard code for models, so the second character may be a digit.
        pattern: "^[A-Z][A-Z0-9]$",
        description: "Information type (e.g. M3 for models)",
        description_ar: "نوع الملف (مثلاً M3 للنماذج)",
    },
    SegmentRule {
        key: "role",
        label: "Role",
        label_ar: "الدور",
        pattern: "^[A-Z]{1,2}$",
        description: "Discipline (e.g. AR for architecture)",
        description_ar: "التخصص (مثلاً AR للمعمار)",
    },
    SegmentRule {
        key: "number",
        label: "Number",
        label_ar: "الرقم",
        pattern: "^[0-9]{4,6}$",
        description: "Sequence number (4-6 digits)",
        description_ar: "رقم تسلسلي (4-6 أرقام)",
    },
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ISO_SEGMENTS
        .iter()
        .map(|rule| Regex::new(rule.pattern).expect("segment patterns are valid regexes"))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentError {
    #[serde(rename = "missing")]
    Missing,
    #[serde(rename = "wrong format")]
    WrongFormat,
}

impl SegmentError {
    pub fn message(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (SegmentError::Missing, Lang::En) => "missing",
            (SegmentError::WrongFormat, Lang::En) => "wrong format",
            (SegmentError::Missing, Lang::Ar) => "مفقود",
            (SegmentError::WrongFormat, Lang::Ar) => "تنسيق غير صحيح",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSegment {
    pub key: &'static str,
    pub name: &'static str,
    pub value: String,
    pub is_valid: bool,
    pub expected_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<SegmentError>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingResult {
    pub filename: String,
    pub extension: String,
    pub is_extension_valid: bool,
    pub segments: Vec<ValidationSegment>,
    pub token_count: usize,
    pub overall_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_feedback: Option<String>,
}

impl NamingResult {
    pub fn failed_segments(&self) -> impl Iterator<Item = &ValidationSegment> {
        self.segments.iter().filter(|segment| !segment.is_valid)
    }

    /// Extra tokens beyond the seven rules. They never show up as segments.
    pub fn surplus_tokens(&self) -> usize {
        self.token_count.saturating_sub(ISO_SEGMENTS.len())
    }
}

/// ISO 19650 naming check
pub struct NamingRule;

impl NamingRule {
    /// Splits `PROJECT-ORIGINATOR-VOLUME-LEVEL-TYPE-ROLE-NUMBER.ext` and checks
    /// every field. Never fails: problems are reported in the result.
    pub fn validate(filename: &str) -> NamingResult {
        let (base, extension) = Self::split_extension(filename);
        let tokens: Vec<&str> = base.split('-').collect();

        let segments: Vec<ValidationSegment> = ISO_SEGMENTS
            .iter()
            .zip(COMPILED.iter())
            .enumerate()
            .map(|(index, (rule, re))| {
                let value = tokens.get(index).copied().unwrap_or("");
                let is_valid = re.is_match(value);
                let error_message = if value.is_empty() {
                    Some(SegmentError::Missing)
                } else if !is_valid {
                    Some(SegmentError::WrongFormat)
                } else {
                    None
                };
                ValidationSegment {
                    key: rule.key,
                    name: rule.label,
                    value: value.to_string(),
                    is_valid,
                    expected_description: rule.description,
                    error_message,
                }
            })
            .collect();

        let is_extension_valid = VALID_EXTENSIONS.contains(&extension.as_str());
        let overall_valid = is_extension_valid
            && segments.iter().all(|segment| segment.is_valid)
            && tokens.len() == ISO_SEGMENTS.len();

        NamingResult {
            filename: base.to_string(),
            extension,
            is_extension_valid,
            segments,
            token_count: tokens.len(),
            overall_valid,
            ai_feedback: None,
        }
    }

    /// Returns the base name and the lower-cased, dot-prefixed extension.
    fn split_extension(filename: &str) -> (&str, String) {
        match filename.rsplit_once('.') {
            Some((base, ext)) => (base, format!(".{}", ext.to_lowercase())),
            None => (filename, String::new()),
        }
    }
}
