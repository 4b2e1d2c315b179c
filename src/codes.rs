use crate::naming::Lang;

/// Well-known information type codes: (code, English, Arabic).
pub const TYPE_CODES: [(&str, &str, &str); 4] = [
    ("M3", "3D Model", "نموذج ثلاثي الأبعاد"),
    ("CR", "Clash Report", "تقرير تداخلات"),
    ("DR", "Drawing", "رسم"),
    ("SP", "Specification", "مواصفة"),
];

/// Well-known discipline (role) codes.
pub const ROLE_CODES: [(&str, &str, &str); 7] = [
    ("AR", "Architecture", "معماري"),
    ("ST", "Structural", "إنشائي"),
    ("ME", "Mechanical", "ميكانيك"),
    ("EL", "Electrical", "كهرباء"),
    ("PL", "Plumbing", "صحي"),
    ("CO", "Coordinator", "منسق"),
    ("CI", "Civil", "مدني"),
];

fn lookup(table: &[(&str, &'static str, &'static str)], code: &str, lang: Lang) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _, _)| *known == code)
        .map(|(_, en, ar)| match lang {
            Lang::En => *en,
            Lang::Ar => *ar,
        })
}

/// Meaning of a known code for the given segment key, if any.
/// Only type and role segments carry a code list.
pub fn describe(segment_key: &str, code: &str, lang: Lang) -> Option<&'static str> {
    match segment_key {
        "type" => lookup(&TYPE_CODES, code, lang),
        "role" => lookup(&ROLE_CODES, code, lang),
        _ => None,
    }
}
