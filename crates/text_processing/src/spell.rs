//! Integer-to-words spelling in English.
//!
//! The spelled-out words are what the phrase translator sends to the
//! provider, so the forms here match common written English ("twenty-one",
//! "one hundred and five").

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Short scale; u64::MAX is ~18.4 quintillion.
const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spell out an integer in English words.
pub fn spell_out(number: u64) -> String {
    if number < 1_000 {
        return spell_under_thousand(number);
    }

    let mut parts = Vec::new();
    let mut remainder = number;

    for (scale, name) in SCALES {
        if remainder >= scale {
            let count = remainder / scale;
            remainder %= scale;
            parts.push(format!("{} {name}", spell_out(count)));
        }
    }

    if remainder > 0 {
        parts.push(spell_under_thousand(remainder));
    }

    parts.join(" ")
}

fn spell_under_thousand(number: u64) -> String {
    debug_assert!(number < 1_000);

    match number {
        0..=19 => ONES[number as usize].to_string(),
        20..=99 => {
            let tens = TENS[(number / 10) as usize];
            let ones = number % 10;
            if ones == 0 {
                tens.to_string()
            } else {
                format!("{tens}-{}", ONES[ones as usize])
            }
        }
        _ => {
            let hundreds = ONES[(number / 100) as usize];
            let rest = number % 100;
            if rest == 0 {
                format!("{hundreds} hundred")
            } else {
                format!("{hundreds} hundred and {}", spell_under_thousand(rest))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(spell_out(0), "zero");
        assert_eq!(spell_out(3), "three");
        assert_eq!(spell_out(12), "twelve");
        assert_eq!(spell_out(19), "nineteen");
    }

    #[test]
    fn tens_and_hyphens() {
        assert_eq!(spell_out(20), "twenty");
        assert_eq!(spell_out(21), "twenty-one");
        assert_eq!(spell_out(99), "ninety-nine");
    }

    #[test]
    fn hundreds_use_and() {
        assert_eq!(spell_out(100), "one hundred");
        assert_eq!(spell_out(101), "one hundred and one");
        assert_eq!(spell_out(345), "three hundred and forty-five");
    }

    #[test]
    fn thousands_and_up() {
        assert_eq!(spell_out(1_000), "one thousand");
        assert_eq!(spell_out(1_500), "one thousand five hundred");
        assert_eq!(
            spell_out(1_000_001),
            "one million one"
        );
        assert_eq!(
            spell_out(2_147_483_647),
            "two billion one hundred and forty-seven million \
             four hundred and eighty-three thousand six hundred and forty-seven"
        );
    }

    #[test]
    fn u64_max_does_not_panic() {
        let spelled = spell_out(u64::MAX);
        assert!(spelled.starts_with("eighteen quintillion"));
    }
}
