use std::collections::BTreeMap;

/// Provider form fields contributed by a category
pub type OptionBundle = BTreeMap<String, String>;

/// Youdao polish level form field
pub const POLISH_OPTION: &str = "polishOption";

/// One classification bucket: keywords to match plus the hints it implies
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    keywords: Vec<String>,
    pub options: OptionBundle,
    pub prompt: String,
}

impl Category {
    /// Keywords are case-folded and deduplicated, first occurrence wins.
    pub fn new<K, S>(name: &str, keywords: K, options: OptionBundle, prompt: &str) -> Self
    where
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if !keyword.is_empty() && !folded.contains(&keyword) {
                folded.push(keyword);
            }
        }

        Self {
            name: name.to_string(),
            keywords: folded,
            options,
            prompt: prompt.to_string(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Number of distinct keywords found in already case-folded text
    pub fn score(&self, folded_text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| folded_text.contains(k.as_str()))
            .count()
    }
}

/// Domain and style categories in declared order. Order is the tie-break.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    pub domains: Vec<Category>,
    pub styles: Vec<Category>,
}

impl Taxonomy {
    pub fn new(domains: Vec<Category>, styles: Vec<Category>) -> Self {
        Self { domains, styles }
    }

    /// The stock table shipped with the proxy
    pub fn builtin() -> Self {
        let domains = vec![
            Category::new(
                "literary",
                LITERARY_DOMAIN_KEYWORDS,
                polish(7),
                "Please translate the following literary text with careful attention to its artistic qualities. \
Maintain the metaphorical expressions and vivid imagery, the rhythm and flow, the emotional impact and atmosphere, \
and the sensory details, while ensuring natural flow in the target language.",
            ),
            Category::new(
                "computer",
                COMPUTER_KEYWORDS,
                polish(9),
                "Please translate the following technical text with appropriate computer science terminology. \
Maintain technical accuracy while ensuring the translation is clear and understandable. \
Use proper formatting for code-related terms and technical concepts.",
            ),
            Category::new(
                "medical",
                MEDICAL_KEYWORDS,
                polish(11),
                "Please translate the following medical text with appropriate medical terminology. \
Ensure accuracy in medical terms while maintaining clarity for the target audience. \
Use proper formatting for medical conditions, procedures, and medications.",
            ),
            Category::new(
                "biology",
                BIOLOGY_KEYWORDS,
                polish(13),
                "Please translate the following biological text with appropriate scientific terminology. \
Maintain accuracy in biological terms while ensuring the translation is clear and precise. \
Use proper formatting for scientific names and biological processes.",
            ),
            Category::new(
                "mechanical",
                MECHANICAL_KEYWORDS,
                polish(15),
                "Please translate the following mechanical engineering text with appropriate technical terminology. \
Ensure accuracy in mechanical terms while maintaining clarity for the target audience. \
Use proper formatting for technical specifications and mechanical processes.",
            ),
            Category::new(
                "finance",
                FINANCE_KEYWORDS,
                polish(1),
                "Please translate the following financial text with appropriate financial terminology. \
Maintain accuracy in financial terms while ensuring the translation is clear and professional. \
Use proper formatting for financial figures and economic concepts.",
            ),
            Category::new(
                "legal",
                LEGAL_KEYWORDS,
                polish(1),
                "Please translate the following legal text with appropriate legal terminology. \
Ensure accuracy in legal terms while maintaining the formal tone of legal documents. \
Use proper formatting for legal citations and references.",
            ),
        ];

        let styles = vec![
            Category::new(
                "literary",
                LITERARY_STYLE_KEYWORDS,
                polish(7),
                "Keep the literary qualities of the text: its rhythm, metaphors and imagery, \
emotional resonance and stylistic devices, balancing accuracy with artistry.",
            ),
            Category::new(
                "formal",
                FORMAL_KEYWORDS,
                polish(1),
                "Use appropriate professional language and maintain the formal tone \
while keeping the translation clear and precise.",
            ),
            Category::new(
                "casual",
                CASUAL_KEYWORDS,
                polish(3),
                "Use appropriate conversational language and maintain the casual tone \
so the translation reads naturally and engagingly.",
            ),
            Category::new(
                "concise",
                CONCISE_KEYWORDS,
                polish(5),
                "Translate concisely, focusing on brevity and directness while maintaining clarity.",
            ),
            Category::new(
                "rich",
                RICH_KEYWORDS,
                polish(7),
                "Keep the rich detail and descriptive language of the original \
so that elaborate explanations stay engaging.",
            ),
            Category::new(
                "technical",
                TECHNICAL_KEYWORDS,
                polish(9),
                "Use appropriate technical terminology and keep technical specifications \
and processes accurate and precise.",
            ),
        ];

        Self::new(domains, styles)
    }

    pub fn domain(&self, name: &str) -> Option<&Category> {
        self.domains.iter().find(|c| c.name == name)
    }

    pub fn style(&self, name: &str) -> Option<&Category> {
        self.styles.iter().find(|c| c.name == name)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

fn polish(level: u8) -> OptionBundle {
    let mut options = OptionBundle::new();
    options.insert(POLISH_OPTION.to_string(), level.to_string());
    options
}

const LITERARY_DOMAIN_KEYWORDS: &[&str] = &[
    "laughter", "whisper", "echo", "sound", "voice", "music", "dance", "smile", "tear", "heart",
    "soul", "spirit", "mood", "atmosphere", "scene", "moment", "memory", "dream", "night", "dawn",
    "sunset", "rain", "wind", "storm", "sea", "mountain", "forest", "garden", "flower", "tree",
    "bird", "shadow", "light", "dark", "color", "taste", "smell", "touch", "feel", "emotion",
    "feeling", "whiskey", "wine", "bar", "cafe", "restaurant", "hotel", "room", "house", "street",
    "city", "town", "village", "country", "world", "universe", "time", "space", "life", "death",
    "love", "hate", "joy", "sorrow", "hope", "fear", "courage", "wisdom",
];

const COMPUTER_KEYWORDS: &[&str] = &[
    "program", "code", "software", "hardware", "computer", "system", "data", "algorithm",
    "network", "database", "server", "client", "api", "interface", "function", "class", "object",
    "variable", "loop", "array", "string", "integer", "float", "boolean", "debug", "compile",
    "runtime", "framework", "library", "package", "module", "dependency", "version", "git",
    "repository", "cloud", "container", "docker", "kubernetes", "microservice", "architecture",
    "protocol", "encryption", "security", "authentication", "authorization", "token", "session",
    "cookie",
];

const MEDICAL_KEYWORDS: &[&str] = &[
    "patient", "disease", "treatment", "symptom", "diagnosis", "medicine", "hospital", "doctor",
    "nurse", "clinic", "therapy", "surgery", "prescription", "pharmacy", "drug", "vaccine",
    "virus", "bacteria", "infection", "inflammation", "chronic", "acute", "syndrome", "pathology",
    "physiology", "anatomy", "neurology", "cardiology", "oncology", "pediatrics", "psychiatry",
    "dermatology", "ophthalmology", "orthopedics", "gynecology", "urology", "emergency",
    "intensive care", "rehabilitation", "prognosis", "mortality", "morbidity",
];

const BIOLOGY_KEYWORDS: &[&str] = &[
    "cell", "gene", "protein", "organism", "species", "evolution", "biology", "genetic", "dna",
    "rna", "chromosome", "mutation", "enzyme", "metabolism", "photosynthesis", "respiration",
    "ecosystem", "biodiversity", "taxonomy", "phylogeny", "morphology", "physiology", "anatomy",
    "microbiology", "botany", "zoology", "ecology", "marine biology", "molecular biology",
    "cell biology", "developmental biology", "population genetics", "biochemistry",
    "biotechnology", "bioinformatics", "genomics", "proteomics", "transcriptomics",
];

const MECHANICAL_KEYWORDS: &[&str] = &[
    "machine", "engine", "mechanical", "device", "equipment", "component", "part", "gear",
    "shaft", "bearing", "pump", "motor", "turbine", "compressor", "valve", "hydraulic",
    "pneumatic", "thermodynamics", "fluid mechanics", "heat transfer", "material science",
    "metallurgy", "welding", "casting", "forging", "machining", "automation", "robotics",
    "control system", "sensor", "actuator", "transmission", "clutch", "brake", "suspension",
    "chassis", "aerodynamics", "propulsion", "manufacturing", "production line",
    "quality control", "maintenance", "repair",
];

const FINANCE_KEYWORDS: &[&str] = &[
    "stock", "bond", "investment", "portfolio", "market", "trading", "broker", "dividend",
    "interest", "loan", "mortgage", "credit", "debit", "account", "balance", "transaction",
    "profit", "loss", "revenue", "expense", "asset", "liability", "equity", "capital",
    "derivative", "option", "future", "hedge", "risk", "return", "yield", "valuation", "analysis",
    "forecast", "budget", "audit", "tax", "insurance", "banking", "fintech",
];

const LEGAL_KEYWORDS: &[&str] = &[
    "law", "legal", "contract", "agreement", "clause", "statute", "regulation", "compliance",
    "litigation", "court", "judge", "jury", "attorney", "lawyer", "plaintiff", "defendant",
    "evidence", "testimony", "witness", "hearing", "trial", "appeal", "verdict", "sentence",
    "jurisdiction", "precedent", "constitution", "amendment", "legislation", "enforcement",
    "intellectual property", "patent", "copyright", "trademark", "license", "permit",
];

const LITERARY_STYLE_KEYWORDS: &[&str] = &[
    "metaphor", "simile", "imagery", "symbol", "allegory", "personification", "hyperbole",
    "irony", "satire", "allusion", "alliteration", "assonance", "rhythm", "rhyme", "meter",
    "stanza", "verse", "prose", "narrative", "descriptive", "poetic", "lyrical", "elegant",
    "graceful", "beautiful", "vivid", "colorful", "rich", "deep", "profound", "meaningful",
    "symbolic", "artistic", "creative", "imaginative", "expressive", "evocative",
];

const FORMAL_KEYWORDS: &[&str] = &[
    "therefore", "thus", "hence", "consequently", "furthermore", "moreover", "academic",
    "accordingly", "subsequently", "previously", "aforementioned", "aforedescribed", "herein",
    "hereto", "hereof", "hereby", "whereas", "whereof", "wherein", "whereby", "pursuant to",
    "in accordance with", "subject to", "notwithstanding", "in lieu of", "in the event of",
    "for the purpose of", "in order to", "with respect to", "with regard to",
];

const CASUAL_KEYWORDS: &[&str] = &[
    "hey", "cool", "awesome", "great", "nice", "wow", "yeah", "okay", "sure", "whatever", "gonna",
    "wanna", "gotta", "kinda", "sorta", "lots", "tons", "pretty", "really", "totally",
    "absolutely", "definitely", "probably", "maybe", "guess", "think", "like", "you know",
    "right", "haha", "lol", "omg", "btw", "imo", "tbh", "idk",
];

const CONCISE_KEYWORDS: &[&str] = &[
    "brief", "short", "simple", "direct", "clear", "concise", "succinct", "terse", "precise",
    "exact", "specific", "focused", "targeted", "streamlined", "efficient", "minimal",
    "essential", "core", "key", "main", "primary", "crucial", "vital", "critical", "important",
    "significant", "relevant", "pertinent", "applicable",
];

const RICH_KEYWORDS: &[&str] = &[
    "elaborate", "detailed", "comprehensive", "thorough", "extensive", "complete", "exhaustive",
    "in-depth", "profound", "deep", "broad", "wide-ranging", "all-encompassing", "all-inclusive",
    "full", "total", "entire", "whole", "minute", "precise", "exact", "accurate", "specific",
    "particular",
];

const TECHNICAL_KEYWORDS: &[&str] = &[
    "parameter", "variable", "constant", "function", "method", "algorithm", "protocol",
    "interface", "implementation", "configuration", "initialization", "deployment",
    "integration", "optimization", "standardization", "normalization", "validation",
    "verification", "authentication", "authorization", "encryption", "decryption",
    "compression", "decompression", "serialization", "deserialization",
];
