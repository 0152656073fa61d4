/// Common passwords, dictionary words and names. The empty string comes first
/// so the digest of empty input is always reversible.
pub const CURATED: &[&str] = &[
    "", "password", "123456", "123456789", "12345678", "12345", "1234567",
    "password123", "admin", "qwerty", "abc123", "Password1", "welcome",
    "monkey", "dragon", "letmein", "trustno1", "sunshine", "master",
    "hello", "world", "test", "user", "guest", "root", "toor", "pass",
    "secret", "love", "god", "money", "live", "forever", "cookie",
    "monster", "blue", "red", "green", "black", "white", "yellow", "orange",
    "purple", "pink", "brown", "gray", "silver", "gold", "diamond", "ruby",
    "emerald", "sapphire", "pearl", "crystal", "magic", "wizard",
    "phoenix", "tiger", "lion", "eagle", "wolf", "bear", "shark", "dolphin",
    "butterfly", "flower", "rose", "lily", "daisy", "tulip", "orchid",
    "spring", "summer", "autumn", "winter", "january", "february", "march",
    "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday", "morning", "afternoon", "evening", "night",
    "midnight", "sunrise", "sunset", "rainbow", "moonlight",
    "starlight", "galaxy", "universe", "earth", "mars", "venus", "jupiter",
    "saturn", "neptune", "pluto", "sun", "moon", "star", "planet", "comet",
    "meteor", "asteroid", "space", "time", "light", "dark", "bright", "shadow",
    "fire", "water", "air", "ice", "snow", "rain", "cloud", "storm",
    "thunder", "lightning", "wind", "breeze", "ocean", "sea", "lake", "river",
    "mountain", "valley", "forest", "desert", "jungle", "field", "garden",
    "park", "street", "road", "path", "bridge", "house", "home", "family",
    "friend", "heart", "soul", "mind", "body", "spirit", "angel",
    "devil", "heaven", "hell", "peace", "war", "hope", "faith", "trust",
    "truth", "lie", "good", "evil", "right", "wrong", "yes", "no", "maybe",
    "always", "never", "sometimes", "here", "there", "everywhere", "nowhere",
    "something", "nothing", "everything", "anything", "someone", "nobody",
    "everybody", "anybody", "me", "you", "us", "them", "he", "she", "it",
    "we", "they", "this", "that", "these", "those", "what", "when", "where",
    "why", "how", "who", "which", "whose", "whom", "hello world", "test123",
    "admin123", "root123", "password1", "password12", "123password",
    "iloveyou", "princess", "football", "baseball", "soccer", "hockey",
    "batman", "superman", "starwars", "pokemon", "matrix", "mustang",
    "michael", "jennifer", "jordan", "thomas", "charlie", "daniel", "jessica",
    "ashley", "robert", "andrew", "joshua", "william", "hunter", "ranger",
    "buster", "killer", "pepper", "ginger", "hannah", "maggie", "summer1",
    "login", "changeme", "default", "access", "administrator", "system",
    "server", "database", "oracle", "mysql", "postgres", "backup", "temp",
    "demo", "sample", "public", "private", "internet", "computer", "freedom",
    "whatever", "passw0rd", "p@ssw0rd", "P@ssw0rd", "Welcome1", "Qwerty123",
];

/// Keyboard walks and digit runs.
pub const KEYBOARD_WALKS: &[&str] = &[
    "qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890",
    "asdfgh", "zxcvbn", "654321", "qwertyui", "asdfghjk", "zxcvbnmm",
    "87654321", "qwertyuio", "zxcvbnm,", "987654321", "poiuytrewq",
    "1qaz2wsx", "qazwsx", "1q2w3e4r", "1q2w3e", "q1w2e3r4", "!@#$%^&*",
];

/// Prefixes and suffixes combined with the bounded number range.
pub const PATTERN_AFFIXES: &[&str] = &["a", "test", "user", "admin"];

/// Words expanded into case, suffix and leetspeak variants.
pub const CORE_WORDS: &[&str] = &[
    "password", "admin", "welcome", "hello", "letmein", "qwerty", "dragon",
    "monkey", "master", "sunshine", "secret", "test", "user", "root", "guest",
    "login", "shadow", "football", "princess", "iloveyou",
];
