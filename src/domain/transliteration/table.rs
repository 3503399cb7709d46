/// Sinhala grapheme -> Latin phonetic mapping.
///
/// Keys are 1 to 4 codepoints long: independent letters, dependent vowel
/// signs, consonant+virama clusters, and ZWJ conjuncts (the `\u{200d}`
/// escapes below are zero-width joiners, kept explicit because they are
/// invisible in source).
pub(crate) const MAPPING: &[(&str, &str)] = &[
    // Independent vowels
    ("අ", "a"), ("ආ", "aa"), ("ඇ", "æ"), ("ඈ", "ææ"), ("ඉ", "i"), ("ඊ", "ii"), ("උ", "u"), ("ඌ", "uu"),
    ("එ", "e"), ("ඒ", "ee"), ("ඓ", "ai"), ("ඔ", "o"), ("ඕ", "oo"), ("ඖ", "au"),
    // Consonants
    ("ක", "ka"), ("ඛ", "kha"), ("ග", "ga"), ("ඝ", "gha"), ("ඞ", "nga"),
    ("ච", "cha"), ("ඡ", "chha"), ("ජ", "ja"), ("ඣ", "jha"), ("ඤ", "nya"),
    ("ට", "ta"), ("ඨ", "tha"), ("ඩ", "da"), ("ඪ", "dha"), ("ණ", "na"),
    ("ත", "tha"), ("ථ", "thha"), ("ද", "da"), ("ධ", "dha"), ("න", "na"),
    ("ප", "pa"), ("ඵ", "pha"), ("බ", "ba"), ("භ", "bha"), ("ම", "ma"),
    ("ය", "ya"), ("ර", "ra"), ("ල", "la"), ("ව", "wa"), ("ශ", "sha"), ("ෂ", "ssa"),
    ("ස", "sa"), ("හ", "ha"), ("ළ", "la"), ("ෆ", "fa"),
    ("ඍ", "ri"), ("ඎ", "rii"),
    // Dependent vowel signs
    ("ා", "a"), ("ැ", "æ"), ("ෑ", "ææ"), ("ි", "i"), ("ී", "ii"),
    ("ු", "u"), ("ූ", "uu"), ("ෘ", "ru"), ("ෲ", "ruu"),
    ("ෙ", "e"), ("ේ", "ee"), ("ෛ", "ai"), ("ො", "o"), ("ෝ", "oo"), ("ෞ", "au"),
    ("ං", "n"), ("ඃ", "h"),
    // Virama clusters and conjuncts
    ("ක්", "k"), ("ක්\u{200d}ර", "kra"), ("ත්", "t"), ("ත්\u{200d}ර", "tra"), ("ඳ", "nd"),
    ("ඳු", "ndu"), ("ඬ", "nda"), ("ඬු", "ndu"), ("ඹ", "mba"),
    ("භ්", "bh"), ("ව්", "v"), ("ස්", "s"), ("ශ්", "sh"),
    ("හ්", "h"), ("ක්ෂ", "ksha"), ("ග්\u{200d}ර", "gra"),
    // Diphthongs and special cases
    ("යු", "yu"), ("යූ", "yuu"), ("වේ", "vee"), ("යෝ", "yo"),
    ("ද්\u{200d}ර", "dra"), ("ප්\u{200d}ර", "pra"), ("ප්", "p"), ("ශ්\u{200d}ර", "shra"),
];
