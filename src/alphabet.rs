/// Working alphabet for the ciphers, in dictionary order with Ё after Е
pub const ALPHABET: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й',
    'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф',
    'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Number of letters in the working alphabet
pub const ALPHABET_SIZE: usize = ALPHABET.len();

/// Get the zero-based alphabet position of a letter (either case)
///
/// Characters outside the alphabet return None
pub fn position(letter: char) -> Option<usize> {
    match letter {
        'А' | 'а' => Some(0),
        'Б' | 'б' => Some(1),
        'В' | 'в' => Some(2),
        'Г' | 'г' => Some(3),
        'Д' | 'д' => Some(4),
        'Е' | 'е' => Some(5),
        'Ё' | 'ё' => Some(6),
        'Ж' | 'ж' => Some(7),
        'З' | 'з' => Some(8),
        'И' | 'и' => Some(9),
        'Й' | 'й' => Some(10),
        'К' | 'к' => Some(11),
        'Л' | 'л' => Some(12),
        'М' | 'м' => Some(13),
        'Н' | 'н' => Some(14),
        'О' | 'о' => Some(15),
        'П' | 'п' => Some(16),
        'Р' | 'р' => Some(17),
        'С' | 'с' => Some(18),
        'Т' | 'т' => Some(19),
        'У' | 'у' => Some(20),
        'Ф' | 'ф' => Some(21),
        'Х' | 'х' => Some(22),
        'Ц' | 'ц' => Some(23),
        'Ч' | 'ч' => Some(24),
        'Ш' | 'ш' => Some(25),
        'Щ' | 'щ' => Some(26),
        'Ъ' | 'ъ' => Some(27),
        'Ы' | 'ы' => Some(28),
        'Ь' | 'ь' => Some(29),
        'Э' | 'э' => Some(30),
        'Ю' | 'ю' => Some(31),
        'Я' | 'я' => Some(32),
        _ => None,
    }
}

/// Check a character is a letter of the working alphabet (either case)
pub fn contains(letter: char) -> bool {
    position(letter).is_some()
}
