#![allow(missing_docs)]
use otpad_core::alphabet::{ALPHABET_LEN, index_of, is_symbol};
use otpad_core::pad_generator::{self, draw_symbols, format_pad};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::thread;

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("test values are positive")
}

fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn generate(length: usize, group_size: usize, line_length: usize) -> Vec<String> {
    pad_generator::generate(nz(length), nz(group_size), nz(line_length))
        .expect("OS random number generator failed")
}

#[test]
fn test_ten_symbols_in_two_groups() {
    let lines = generate(10, 5, 10);

    assert_eq!(lines.len(), 1);
    let groups: Vec<&str> = lines[0].split(' ').collect();
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.len() == 5));
    assert_eq!(lines[0].len(), 11);
}

#[test]
fn test_remainder_goes_to_last_line() {
    let lines = generate(12, 5, 10);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 11);
    assert_eq!(lines[0].matches(' ').count(), 1);
    assert_eq!(lines[1].len(), 2);
    assert!(!lines[1].contains(' '));
}

#[test]
fn test_single_symbol() {
    let lines = generate(1, 5, 10);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 1);
    assert!(lines[0].chars().all(is_symbol));
}

#[test]
fn test_large_group_size_disables_grouping() {
    for group_size in [10, 11, 1000] {
        let lines = generate(35, group_size, 10);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| !line.contains(' ')));
        assert_eq!(lines[3].len(), 5);
    }
}

#[test]
fn test_shape_holds_across_parameters() {
    for length in [1, 2, 9, 10, 11, 49, 50, 51, 1000] {
        for group_size in [1, 3, 5, 7] {
            for line_length in [1, 4, 10, 50] {
                let lines = generate(length, group_size, line_length);
                assert_eq!(lines.len(), length.div_ceil(line_length));

                let stripped = strip_separators(&lines.join("\n"));
                assert_eq!(stripped.len(), length);
                assert!(stripped.chars().all(is_symbol));

                for (i, line) in lines.iter().enumerate() {
                    let symbols = line.chars().filter(|c| *c != ' ').count();
                    let expected = if i + 1 < lines.len() {
                        line_length
                    } else {
                        length - line_length * (lines.len() - 1)
                    };
                    assert_eq!(symbols, expected);
                    assert!(!line.starts_with(' ') && !line.ends_with(' '));
                    assert!(!line.contains("  "));
                }
            }
        }
    }
}

#[test]
fn test_format_is_lossless_and_deterministic() {
    let symbols = "ABCDEFGHIJKLMNOPQRSTUVWXYZABCD";

    let lines = format_pad(symbols, nz(4), nz(12));
    assert_eq!(lines, vec!["ABCD EFGH IJKL", "MNOP QRST UVWX", "YZAB CD"]);
    assert_eq!(strip_separators(&lines.join("\n")), symbols);
    assert_eq!(format_pad(symbols, nz(4), nz(12)), lines);
}

#[test]
fn test_format_group_size_not_dividing_line_length() {
    let lines = format_pad("ABCDEFGHIJ", nz(3), nz(5));
    assert_eq!(lines, vec!["ABC DE", "FGH IJ"]);
}

#[test]
fn test_independent_calls_differ() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let symbols = draw_symbols(nz(20)).expect("OS random number generator failed");
        assert!(seen.insert(symbols), "two draws of 20 symbols were identical");
    }
}

#[test]
fn test_concurrent_generation() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| generate(100, 5, 50)))
        .collect();

    let pads: HashSet<String> = handles
        .into_iter()
        .map(|h| h.join().expect("generator thread panicked").concat())
        .collect();
    assert_eq!(pads.len(), 8);
}

#[test]
fn test_symbols_are_uniform() {
    const PER_SYMBOL: usize = 10_000;
    // Chi-squared critical value for 25 degrees of freedom at p = 0.0001 is about 59.
    const CRITICAL: f64 = 60.0;

    let symbols =
        draw_symbols(nz(PER_SYMBOL * ALPHABET_LEN)).expect("OS random number generator failed");
    let mut counts = [0usize; ALPHABET_LEN];
    for c in symbols.chars() {
        counts[index_of(c).expect("symbol outside the alphabet")] += 1;
    }

    let expected = PER_SYMBOL as f64;
    let chi_squared: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    assert!(counts.iter().all(|&c| c > 0));
    assert!(chi_squared < CRITICAL, "chi-squared statistic too high: {chi_squared}");
}
