/// Keyword tables driving the assessment heuristics.
///
/// Entries are lowercase and matched as plain substrings of the lowercased
/// description. Tables are `'static` so a lexicon is built once and shared by
/// every engine clone.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    pub emotion_categories: &'static [(&'static str, &'static [&'static str])],
    pub high_risk: &'static [&'static str],
    pub medium_risk: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::spanish()
    }
}

impl Lexicon {
    pub const fn spanish() -> Self {
        Self {
            positive: SPANISH_POSITIVE,
            negative: SPANISH_NEGATIVE,
            emotion_categories: SPANISH_EMOTION_CATEGORIES,
            high_risk: SPANISH_HIGH_RISK,
            medium_risk: SPANISH_MEDIUM_RISK,
        }
    }
}

pub(crate) fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

// "animado" and "esperanza" are left out: they are substrings of
// "desanimado" and "desesperanza".
const SPANISH_POSITIVE: &[&str] = &[
    "feliz",
    "contento",
    "contenta",
    "alegre",
    "alegría",
    "bien",
    "genial",
    "fantástico",
    "fantástica",
    "excelente",
    "maravilloso",
    "maravillosa",
    "optimista",
    "lleno de energía",
    "llena de energía",
    "con energía",
    "tranquilo",
    "tranquila",
    "agradecido",
    "agradecida",
    "motivado",
    "motivada",
    "satisfecho",
    "satisfecha",
    "relajado",
    "relajada",
    "orgulloso",
    "orgullosa",
    "ilusionado",
    "ilusionada",
];

// "mal" is left out: it matches inside "normal". "triste" already covers
// "tristeza", so listing both would count one word twice.
const SPANISH_NEGATIVE: &[&str] = &[
    "triste",
    "deprimido",
    "deprimida",
    "desanimado",
    "desanimada",
    "ansioso",
    "ansiosa",
    "preocupado",
    "preocupada",
    "nervioso",
    "nerviosa",
    "estresado",
    "estresada",
    "cansado",
    "cansada",
    "agotado",
    "agotada",
    "enojado",
    "enojada",
    "frustrado",
    "frustrada",
    "miedo",
    "angustia",
    "desesperado",
    "desesperada",
    "llorar",
    "vacío",
    "dolor",
    "horrible",
    "terrible",
    "fatal",
];

const SPANISH_EMOTION_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "alegría",
        &[
            "feliz",
            "alegre",
            "alegría",
            "contento",
            "contenta",
            "fantástico",
            "fantástica",
            "genial",
        ],
    ),
    (
        "tristeza",
        &[
            "triste",
            "tristeza",
            "deprimido",
            "deprimida",
            "desanimado",
            "desanimada",
            "llorar",
        ],
    ),
    (
        "ansiedad",
        &[
            "ansioso",
            "ansiosa",
            "ansiedad",
            "nervioso",
            "nerviosa",
            "preocupado",
            "preocupada",
            "inquieto",
            "inquieta",
            "angustia",
        ],
    ),
    (
        "enojo",
        &[
            "enojado",
            "enojada",
            "furioso",
            "furiosa",
            "molesto",
            "molesta",
            "frustrado",
            "frustrada",
            "rabia",
        ],
    ),
    (
        "miedo",
        &["miedo", "asustado", "asustada", "temor", "pánico"],
    ),
    (
        "desesperanza",
        &[
            "desesperado",
            "desesperada",
            "desesperanza",
            "sin esperanza",
            "sin salida",
        ],
    ),
    (
        "soledad",
        &[
            "solo",
            "sola",
            "soledad",
            "aislado",
            "aislada",
            "abandonado",
            "abandonada",
        ],
    ),
    (
        "cansancio",
        &[
            "cansado",
            "cansada",
            "agotado",
            "agotada",
            "exhausto",
            "exhausta",
            "sin energía",
        ],
    ),
    (
        "calma",
        &[
            "tranquilo",
            "tranquila",
            "relajado",
            "relajada",
            "en paz",
            "sereno",
            "serena",
        ],
    ),
    (
        "gratitud",
        &["agradecido", "agradecida", "gracias", "bendecido", "bendecida"],
    ),
    (
        "optimismo",
        &[
            "optimista",
            "motivado",
            "motivada",
            "ilusionado",
            "ilusionada",
            "lleno de energía",
            "llena de energía",
        ],
    ),
];

const SPANISH_HIGH_RISK: &[&str] = &[
    "suicid",
    "matarme",
    "quitarme la vida",
    "acabar con mi vida",
    "acabar con todo",
    "no quiero vivir",
    "quiero morir",
    "hacerme daño",
    "lastimarme",
    "cortarme",
    "mejor muerto",
    "mejor muerta",
    "no vale la pena vivir",
    "no puedo más",
    "sin salida",
];

const SPANISH_MEDIUM_RISK: &[&str] = &[
    "desesperanza",
    "sin esperanza",
    "no valgo nada",
    "no sirvo para nada",
    "inútil",
    "nadie me quiere",
    "a nadie le importo",
    "me siento solo",
    "me siento sola",
    "aislado",
    "aislada",
    "abandonado",
    "abandonada",
    "no tiene sentido",
    "soy una carga",
];
