//! College email eligibility check for the signup form.

/// Returns true iff the suffix after the **last** `@` in `email` equals
/// `domain`, case-insensitively. Comparing from the last `@` defends
/// against local parts that embed a fake `@domain` before the real one.
/// Empty email, empty domain, or an email without `@` are all false;
/// never panics.
pub fn college_email_matches(email: &str, domain: &str) -> bool {
    if email.is_empty() || domain.is_empty() {
        return false;
    }

    match email.rsplit_once('@') {
        Some((_, suffix)) => suffix.to_lowercase() == domain.to_lowercase(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_domain_is_accepted() {
        assert!(college_email_matches("student@college.edu", "college.edu"));
    }

    #[test]
    fn comparison_is_case_insensitive_both_ways() {
        assert!(college_email_matches("student@College.EDU", "college.edu"));
        assert!(college_email_matches("student@college.edu", "COLLEGE.edu"));
    }

    #[test]
    fn only_the_suffix_after_the_last_at_counts() {
        assert!(college_email_matches("user@fake@real.edu", "real.edu"));
        assert!(!college_email_matches("user@fake@real.edu", "fake"));
    }

    #[test]
    fn empty_inputs_are_rejected_without_panicking() {
        assert!(!college_email_matches("", "x.edu"));
        assert!(!college_email_matches("a@x.edu", ""));
        assert!(!college_email_matches("", ""));
    }

    #[test]
    fn missing_at_sign_is_rejected() {
        assert!(!college_email_matches("studentcollege.edu", "college.edu"));
    }

    #[test]
    fn wrong_domain_is_rejected() {
        assert!(!college_email_matches("student@other.edu", "college.edu"));
    }

    #[test]
    fn trailing_at_leaves_an_empty_suffix() {
        assert!(!college_email_matches("student@", "college.edu"));
    }
}
