//! The 29-letter Turkish alphabet over ISO-8859-9 (Latin-5) bytes.
//!
//! q, w and x are not part of it. The six Turkish letters sit in their
//! alphabetical place, so indices are not ASCII order.

pub const ALPHABET_LEN: usize = 29;

/// Fold result for bytes outside the alphabet.
pub const NUL: u8 = 0x00;

/// Canonical (lowercase) Latin-5 byte per index.
pub const LETTERS: [u8; ALPHABET_LEN] = [
    b'a', b'b', b'c', 0xe7, b'd', b'e', b'f', b'g', 0xf0, b'h', 0xfd, b'i', b'j', b'k', b'l',
    b'm', b'n', b'o', 0xf6, b'p', b'r', b's', 0xfe, b't', b'u', 0xfc, b'v', b'y', b'z',
];

/// Same letters as Unicode scalars, for UTF-8 output.
pub const LETTER_CHARS: [char; ALPHABET_LEN] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

// (lowercase, uppercase) Latin-5 codes of the Turkish-only letters
const TURKISH_CASES: [(u8, u8); 6] = [
    (0xe7, 0xc7), // ç Ç
    (0xf0, 0xd0), // ğ Ğ
    (0xfd, 0xdd), // ı İ
    (0xf6, 0xd6), // ö Ö
    (0xfe, 0xde), // ş Ş
    (0xfc, 0xdc), // ü Ü
];

const INVALID: u8 = u8::MAX;

const fn build_index() -> [u8; 256] {
    let mut t = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET_LEN {
        let lower = LETTERS[i];
        t[lower as usize] = i as u8;
        if lower.is_ascii_lowercase() {
            t[lower.to_ascii_uppercase() as usize] = i as u8;
        }
        i += 1;
    }
    let mut k = 0;
    while k < TURKISH_CASES.len() {
        let (lower, upper) = TURKISH_CASES[k];
        t[upper as usize] = t[lower as usize];
        k += 1;
    }
    t
}

static INDEX: [u8; 256] = build_index();

/// Alphabet index of a raw byte, `None` for anything outside the alphabet.
#[inline]
pub fn classify(byte: u8) -> Option<usize> {
    match INDEX[byte as usize] {
        INVALID => None,
        i => Some(i as usize),
    }
}

/// Canonical lowercase byte of a raw byte, or [`NUL`].
#[inline]
pub fn fold(byte: u8) -> u8 {
    classify(byte).map_or(NUL, |i| LETTERS[i])
}

pub fn letter_byte(index: usize) -> u8 {
    LETTERS[index]
}

pub fn letter_char(index: usize) -> char {
    LETTER_CHARS[index]
}
