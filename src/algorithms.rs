// SPDX-License-Identifier: MIT
// Pure Rust implementations of the Jaro and Jaro-Winkler similarity metrics.
// Standard O(N*range) windowed matching; scratch buffers are sized to the
// inputs and live for a single call.

/// Winkler prefix scaling factor. Fixed, not a tunable.
const SCALING_FACTOR: f64 = 0.1;

/// Maximum common-prefix length rewarded by the Winkler bonus.
const MAX_PREFIX: usize = 4;

/// Jaro similarity in [0, 1].
///
/// Returns 0.0 whenever either input is empty, including both-empty, and
/// whenever the two inputs share no matched characters.
pub fn jaro<T: Copy + PartialEq>(s: &[T], a: &[T]) -> f64 {
    let sl = s.len();
    let al = a.len();

    if sl == 0 || al == 0 {
        return 0.0;
    }

    let range = (sl.max(al) / 2).saturating_sub(1);

    let mut s_flags = vec![false; sl];
    let mut a_flags = vec![false; al];
    let mut matches = 0usize;

    // Greedy windowed matching: each position of `a` consumes the first
    // unmatched equal character of `s` inside its window.
    for i in 0..al {
        let start = i.saturating_sub(range);
        let end = (i + range + 1).min(sl);
        for j in start..end {
            if s_flags[j] || s[j] != a[i] {
                continue;
            }
            s_flags[j] = true;
            a_flags[i] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Transpositions: walk the matched positions of both strings in order
    // and count aligned pairs that disagree. Both sides carry `matches` set
    // flags, so the cursor finds a set flag before running off `s`; the
    // bound is still checked rather than trusted.
    let mut transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..al {
        if !a_flags[i] {
            continue;
        }
        while k < sl && !s_flags[k] {
            k += 1;
        }
        debug_assert!(k < sl, "matched flag counts out of sync");
        if k < sl {
            if a[i] != s[k] {
                transpositions += 1;
            }
            k += 1;
        }
    }

    let m = matches as f64;
    let t = (transpositions / 2) as f64;
    (m / sl as f64 + m / al as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity in [0, 1]: Jaro plus a bonus proportional to the
/// common leading prefix, capped at `MAX_PREFIX` characters.
///
/// The bonus is never applied to a zero-match pair, so disjoint strings score
/// exactly 0.0. No separate clamp is needed: with the prefix capped at 4 and
/// the bonus scaled by `1 - jaro`, the score tops out at exactly 1.0.
pub fn jaro_winkler<T: Copy + PartialEq>(s: &[T], a: &[T]) -> f64 {
    let jaro_score = jaro(s, a);
    // jaro() yields 0.0 only for empty inputs or zero matches.
    if jaro_score == 0.0 {
        return 0.0;
    }
    let prefix_len = s
        .iter()
        .zip(a.iter())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count() as f64;
    jaro_score + prefix_len * SCALING_FACTOR * (1.0 - jaro_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jw(s: &str, a: &str) -> f64 {
        jaro_winkler(s.as_bytes(), a.as_bytes())
    }

    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
    }

    #[test]
    fn classical_reference_values() {
        assert_close(jw("MARTHA", "MARHTA"), 0.961_111_1);
        assert_close(jw("DIXON", "DICKSONX"), 0.813_333_3);
        assert_close(jw("DWAYNE", "DUANE"), 0.84);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(jw("", "ABC"), 0.0);
        assert_eq!(jw("ABC", ""), 0.0);
        assert_eq!(jw("", ""), 0.0);
        assert_eq!(jaro::<u8>(b"", b""), 0.0);
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(jw("ABC", "ABC"), 1.0);
        assert_eq!(jw("a", "a"), 1.0);
        assert_eq!(jw("jellyfish", "jellyfish"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(jw("ABC", "XYZ"), 0.0);
        // Zero matches skip the prefix bonus outright, so the score stays
        // exactly 0.0 rather than picking up a Winkler boost.
        assert_eq!(jw("abab", "cdcd"), 0.0);
        assert_eq!(jaro(b"ABC".as_slice(), b"XYZ".as_slice()), 0.0);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let samples = [
            ("MARTHA", "MARHTA"),
            ("DIXON", "DICKSONX"),
            ("a", "zzzzzzzzzzzz"),
            ("frog", "fog"),
            ("hello world", "world hello"),
            ("x", "y"),
        ];
        for (s, a) in samples {
            let score = jw(s, a);
            assert!((0.0..=1.0).contains(&score), "{s:?}/{a:?} -> {score}");
            let plain = jaro(s.as_bytes(), a.as_bytes());
            assert!((0.0..=1.0).contains(&plain), "{s:?}/{a:?} -> {plain}");
        }
    }

    #[test]
    fn longer_shared_prefix_scores_higher_at_equal_jaro() {
        // Both pairs are one adjacent swap apart in a 4-char string, hence
        // the same Jaro score; only the shared-prefix length differs.
        let swapped_tail = ("abcd", "abdc"); // prefix 2
        let swapped_head = ("bacd", "abcd"); // prefix 0
        let j1 = jaro(swapped_tail.0.as_bytes(), swapped_tail.1.as_bytes());
        let j2 = jaro(swapped_head.0.as_bytes(), swapped_head.1.as_bytes());
        assert_close(j1, j2);
        assert!(jw(swapped_tail.0, swapped_tail.1) > jw(swapped_head.0, swapped_head.1));
    }

    #[test]
    fn prefix_bonus_caps_at_four() {
        // Six equal leading chars, but only four count toward the bonus.
        let base = jaro(b"abcdefgh".as_slice(), b"abcdefhg".as_slice());
        let boosted = jw("abcdefgh", "abcdefhg");
        assert_close(boosted, base + 4.0 * 0.1 * (1.0 - base));
    }

    #[test]
    fn transpositions_reduce_the_score() {
        assert!(jw("MARTHA", "MARHTA") < 1.0);
        assert!(jaro(b"MARTHA".as_slice(), b"MARHTA".as_slice()) < 1.0);
        // A swap hurts less than a substitution.
        assert!(jw("abcd", "abdc") > jw("abcd", "abxc"));
    }

    #[test]
    fn symmetric_on_reference_pairs() {
        // Symmetry is not assumed by the construction; verify it empirically
        // on mixed-length pairs.
        let samples = [
            ("MARTHA", "MARHTA"),
            ("DIXON", "DICKSONX"),
            ("DWAYNE", "DUANE"),
            ("frog", "fog"),
            ("", "ABC"),
        ];
        for (s, a) in samples {
            assert_eq!(jw(s, a), jw(a, s), "{s:?}/{a:?}");
        }
    }

    #[test]
    fn works_over_code_points() {
        let s: Vec<char> = "grüße".chars().collect();
        let a: Vec<char> = "grüsse".chars().collect();
        assert_eq!(jaro_winkler(&s, &s), 1.0);
        let score = jaro_winkler(&s, &a);
        assert!(score > 0.8 && score < 1.0);
    }

    #[test]
    fn single_char_window() {
        // max(1, 1)/2 - 1 saturates to a zero-radius window.
        assert_eq!(jw("a", "a"), 1.0);
        assert_eq!(jw("a", "b"), 0.0);
        assert_close(jw("ab", "a"), jw("a", "ab"));
    }
}
