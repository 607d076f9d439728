/// Title-case a string: a letter following a non-letter is uppercased,
/// every other letter is lowercased.
///
/// Matches the common dataframe `str.title()` behavior, so hyphenated
/// labels like "unhealthy for sensitive groups" and "good-fair" come out
/// as "Unhealthy For Sensitive Groups" and "Good-Fair".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
