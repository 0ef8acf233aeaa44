//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// True if the string is one or more ASCII decimal digits and nothing else.
pub fn is_digits_only(s: &str) -> bool {
  !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge model responses.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) { end -= 1; }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_every_occurrence() {
    let out = fill_template("{a} and {a} but not {b}", &[("a", "x")]);
    assert_eq!(out, "x and x but not {b}");
  }

  #[test]
  fn digits_only_matches_plain_numbers() {
    assert!(is_digits_only("0"));
    assert!(is_digits_only("20240101"));
  }

  #[test]
  fn digits_only_rejects_mixed_or_empty_input() {
    assert!(!is_digits_only(""));
    assert!(!is_digits_only(" 42"));
    assert!(!is_digits_only("42\n"));
    assert!(!is_digits_only("-1"));
    assert!(!is_digits_only("1.5"));
    assert!(!is_digits_only("WW2"));
    // non-ASCII digits are not decimal digits here
    assert!(!is_digits_only("٣"));
  }

  #[test]
  fn trunc_for_log_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    let out = trunc_for_log("ééé", 3);
    assert!(out.starts_with('é'));
    assert!(out.ends_with("(6 bytes total)"));
  }
}
