/// Key of an own property.
///
/// Strings that spell a canonical array index (`"0"`..=`"4294967294"`, no
/// sign, no leading zeros) are stored as `Index`, so `obj["2"]` and `obj[2]`
/// address the same slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Index(u32),
    String(String),
}

/// Largest valid array index is 2^32 - 2; 2^32 - 1 is an ordinary key.
const MAX_ARRAY_INDEX: u32 = u32::MAX - 1;

fn canonical_index(s: &str) -> Option<u32> {
    if s.is_empty() || (s.len() > 1 && s.starts_with('0')) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&i| i <= MAX_ARRAY_INDEX)
}

impl PropertyKey {
    pub fn as_index(&self) -> Option<u32> {
        match self {
            PropertyKey::Index(i) => Some(*i),
            PropertyKey::String(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        match canonical_index(s) {
            Some(i) => PropertyKey::Index(i),
            None => PropertyKey::String(s.to_string()),
        }
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(i) => PropertyKey::Index(i),
            None => PropertyKey::String(s),
        }
    }
}

impl From<&String> for PropertyKey {
    fn from(s: &String) -> Self {
        PropertyKey::from(s.as_str())
    }
}

impl From<u32> for PropertyKey {
    fn from(i: u32) -> Self {
        if i <= MAX_ARRAY_INDEX {
            PropertyKey::Index(i)
        } else {
            PropertyKey::String(i.to_string())
        }
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKey::Index(i) => write!(f, "{i}"),
            PropertyKey::String(s) => write!(f, "{s}"),
        }
    }
}
