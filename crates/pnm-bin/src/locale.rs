/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Language of the text output
//!
//! The locale is chosen once on the command line and handed to the
//! renderer and the interactive loop, nothing reads it from the process
//! environment.
use clap::builder::PossibleValue;
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Locale {
    English,
    Polish
}

impl ValueEnum for Locale {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::English, Self::Polish]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::English => PossibleValue::new("en"),
            Self::Polish => PossibleValue::new("pl")
        })
    }
}

/// Every user facing string of the text output
pub struct Messages {
    pub prompt_file:       &'static str,
    pub prompt_continue:   &'static str,
    pub file:              &'static str,
    pub format:            &'static str,
    pub width:             &'static str,
    pub height:            &'static str,
    pub gray_mode:         &'static str,
    pub color_mode:        &'static str,
    pub occurrences:       &'static str,
    pub gray_distinct:     &'static str,
    pub color_distinct:    &'static str,
    pub no_samples:        &'static str,
    pub file_not_found:    &'static str,
    pub unreadable:        &'static str,
    pub unsupported_file:  &'static str,
    pub affirmative_words: &'static [&'static str]
}

static ENGLISH: Messages = Messages {
    prompt_file:       "Enter a file name: ",
    prompt_continue:   "Load another file (yes/no): ",
    file:              "File",
    format:            "Format",
    width:             "Image width",
    height:            "Image height",
    gray_mode:         "Most frequent gray value",
    color_mode:        "Most frequent color",
    occurrences:       "times",
    gray_distinct:     "Distinct gray values",
    color_distinct:    "Distinct colors",
    no_samples:        "The image has no samples",
    file_not_found:    "Cannot open the file",
    unreadable:        "Cannot read the file",
    unsupported_file:  "Unsupported file",
    affirmative_words: &["y", "yes"]
};

static POLISH: Messages = Messages {
    prompt_file:       "Podaj nazwę pliku: ",
    prompt_continue:   "Czy chcesz wczytać kolejny plik (tak/nie): ",
    file:              "Plik",
    format:            "Format",
    width:             "Szerokość obrazu",
    height:            "Wysokość obrazu",
    gray_mode:         "Najczęściej występujący odcień szarości",
    color_mode:        "Najczęściej występujący kolor",
    occurrences:       "razy",
    gray_distinct:     "Liczba unikalnych odcieni szarości",
    color_distinct:    "Liczba unikalnych kolorów",
    no_samples:        "Obraz nie zawiera pikseli",
    file_not_found:    "Nie można otworzyć pliku",
    unreadable:        "Nie można odczytać pliku",
    unsupported_file:  "Nieobsługiwany format pliku",
    affirmative_words: &["t", "tak"]
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Polish => &POLISH
        }
    }
    /// Return true if `answer` means "continue" in this locale
    ///
    /// Matching ignores case and surrounding whitespace
    pub fn is_affirmative(self, answer: &str) -> bool {
        let answer = answer.trim();
        self.messages()
            .affirmative_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(answer))
    }
}

#[test]
fn test_affirmative_tokens() {
    assert!(Locale::English.is_affirmative("yes\n"));
    assert!(Locale::English.is_affirmative(" Y "));
    assert!(!Locale::English.is_affirmative("tak"));
    assert!(Locale::Polish.is_affirmative("TAK"));
    assert!(!Locale::Polish.is_affirmative("nie"));
    assert!(!Locale::Polish.is_affirmative(""));
}
