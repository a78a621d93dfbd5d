use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use entropia::alphabet::{ALPHABET, ALPHABET_SIZE};
use entropia::{caesar, keyed, transposition};

fn random_letters(len: usize) -> String {
    let mut rng = thread_rng();
    (0..len)
        .map(|_| *ALPHABET.choose(&mut rng).unwrap())
        .collect()
}

// letters of both cases mixed with spaces, punctuation and foreign characters
fn random_text(len: usize) -> String {
    let mut rng = thread_rng();
    (0..len)
        .map(|_| {
            if rng.gen_range(0, 5) == 0 {
                *[' ', ',', '!', '7', 'q'].choose(&mut rng).unwrap()
            } else {
                let c = *ALPHABET.choose(&mut rng).unwrap();
                if rng.gen::<bool>() {
                    c.to_lowercase().next().unwrap()
                } else {
                    c
                }
            }
        })
        .collect()
}

#[test]
fn caesar_known_answers() {
    assert_eq!(caesar::encrypt("АБВ", 3), "ГДЕ");
    assert_eq!(caesar::decrypt("ГДЕ", 3), "АБВ");
    assert_eq!(caesar::encrypt("ЕЖ", 1), "ЁЗ");
    assert_eq!(caesar::encrypt("ЭЮЯ", 3), "АБВ");
    assert_eq!(caesar::encrypt("Привет, мир!", 5), "Фхнжйч, снх!");
}

#[test]
fn caesar_round_trips_any_text_and_shift() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let text = random_text(rng.gen_range(0, 48));
        let shift = rng.gen_range(-1_000_000, 1_000_000);
        assert_eq!(caesar::decrypt(&caesar::encrypt(&text, shift), shift), text);
    }
}

#[test]
fn caesar_shift_reduces_modulo_alphabet() {
    let text = random_letters(24);
    let size = ALPHABET_SIZE as i64;

    assert_eq!(caesar::encrypt(&text, 0), text);
    assert_eq!(caesar::encrypt(&text, size), text);
    assert_eq!(caesar::encrypt(&text, 5), caesar::encrypt(&text, 5 - 2 * size));
}

#[test]
fn key_cipher_known_answers() {
    assert_eq!(keyed::encrypt("РОССИЯ", "КЛЮЧ"), "ЬЫРЙФЛ");
    assert_eq!(keyed::decrypt("ЬЫРЙФЛ", "КЛЮЧ"), "РОССИЯ");
    assert_eq!(keyed::encrypt("привет, мир!", "ключ"), "ЫЭЗЪРЯЛБЬ");
}

#[test]
fn key_cipher_round_trips_normalized_text() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let text = random_letters(rng.gen_range(1, 64));
        let key = random_letters(rng.gen_range(1, 12));
        assert_eq!(keyed::decrypt(&keyed::encrypt(&text, &key), &key), text);
    }
}

#[test]
fn key_cipher_key_case_is_irrelevant() {
    let text = random_letters(32);
    let key = "ключик";
    assert_eq!(
        keyed::encrypt(&text, key),
        keyed::encrypt(&text, "КЛЮЧИК"),
    );
}

#[test]
fn transposition_known_answers() {
    assert_eq!(transposition::encrypt("TESTTEXT", 4), "TTEESXTT");
    assert_eq!(transposition::decrypt("TTEESXTT", 4), "TESTTEXT");
    assert_eq!(transposition::encrypt("ПРИВЕТ МИР", 4), "ПЕИРТРИ__ВМ_");
    assert_eq!(transposition::decrypt("ПЕИРТРИ__ВМ_", 4), "ПРИВЕТ_МИР__");
}

#[test]
fn transposition_round_trips_exact_grids() {
    let mut rng = thread_rng();

    for _ in 0..100 {
        let cols = rng.gen_range(1, 9);
        let rows = rng.gen_range(1, 9);
        let text = random_letters(cols * rows);

        let encrypted = transposition::encrypt(&text, cols);
        assert_eq!(encrypted.chars().count(), cols * rows);
        assert_eq!(transposition::decrypt(&encrypted, cols), text);
    }
}

#[test]
fn transposition_round_trip_keeps_pad_characters() {
    let text = "АТАКА НА РАССВЕТЕ";
    let round = transposition::decrypt(&transposition::encrypt(text, 4), 4);

    // spaces come back as underscores and the tail stays padded
    assert_eq!(round, "АТАКА_НА_РАССВЕТЕ___");

    let mut expected: Vec<char> = text.chars().map(|c| if c == ' ' { '_' } else { c }).collect();
    while expected.len() % 4 != 0 {
        expected.push('_');
    }
    assert_eq!(round, expected.into_iter().collect::<String>());
}
