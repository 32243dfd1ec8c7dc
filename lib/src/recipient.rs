use crate::error::BatchMailerError;
use regex::Regex;
use std::fmt;

const ADDRESS_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";

/// An email address that passed [`Recipient::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipient(String);

impl Recipient {
    pub fn parse(raw: &str) -> Result<Self, BatchMailerError> {
        AddressMatcher::new()?.recipient(raw).ok_or_else(|| {
            BatchMailerError::validation(&format!("Malformed recipient address: '{}'", raw.trim()), "Failed to validate recipient")
        })
    }

    /// Validates the whole list up front. Any malformed entry rejects the batch,
    /// and the error names every offending address in input order.
    pub fn parse_all<S: AsRef<str>>(raws: &[S]) -> Result<Vec<Self>, BatchMailerError> {
        if raws.is_empty() {
            return Err(BatchMailerError::validation("No recipients given", "Failed to validate recipients"));
        }

        let matcher = AddressMatcher::new()?;

        let mut recipients = Vec::with_capacity(raws.len());
        let mut malformed = vec![];

        for raw in raws {
            match matcher.recipient(raw.as_ref()) {
                Some(recipient) => recipients.push(recipient),
                None => malformed.push(format!("'{}'", raw.as_ref().trim())),
            }
        }

        if !malformed.is_empty() {
            return Err(BatchMailerError::validation(
                &format!("Malformed recipient address(es): {}", malformed.join(", ")),
                &format!("Failed to validate recipients, {} of {} rejected", malformed.len(), raws.len()),
            ));
        }

        Ok(recipients)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct AddressMatcher {
    regex: Regex,
}

impl AddressMatcher {
    fn new() -> Result<Self, BatchMailerError> {
        let regex = Regex::new(ADDRESS_PATTERN).map_err(|error| BatchMailerError::fatal(&error.to_string(), "Failed to compile address pattern"))?;

        Ok(Self { regex })
    }

    fn recipient(
        &self,
        raw: &str,
    ) -> Option<Recipient> {
        let trimmed = raw.trim();

        if self.regex.is_match(trimmed) {
            Some(Recipient(trimmed.to_string()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("alice@example.com")]
    #[case::subdomain("bob.smith@mail.example.co.uk")]
    #[case::plus_tag("carol+news@example.org")]
    #[case::surrounding_whitespace("  dave@example.com\n")]
    fn accepts_well_formed_addresses(#[case] raw: &str) {
        let recipient = Recipient::parse(raw).unwrap();
        assert_eq!(raw.trim(), recipient.as_str());
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_at("alice.example.com")]
    #[case::empty_local("@example.com")]
    #[case::empty_domain("alice@")]
    #[case::two_ats("alice@bob@example.com")]
    #[case::inner_space("alice smith@example.com")]
    #[case::inner_tab("alice@exa\tmple.com")]
    fn rejects_malformed_addresses(#[case] raw: &str) {
        let error = Recipient::parse(raw).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn parse_all_keeps_input_order() {
        let recipients = Recipient::parse_all(&["b@example.com", "a@example.com", "c@example.com"]).unwrap();

        let addresses = recipients.iter().map(Recipient::as_str).collect::<Vec<_>>();
        assert_eq!(vec!["b@example.com", "a@example.com", "c@example.com"], addresses);
    }

    #[test]
    fn parse_all_reports_every_malformed_address() {
        let error = Recipient::parse_all(&["ok@example.com", "broken", "also ok@example.com", "fine@example.com"]).unwrap_err();

        assert!(error.is_validation());
        assert!(error.cause.contains("'broken'"));
        assert!(error.cause.contains("'also ok@example.com'"));
        assert!(!error.cause.contains("fine@example.com"));
        assert_eq!(Some("Failed to validate recipients, 2 of 4 rejected".to_string()), error.message);
    }

    #[test]
    fn parse_all_rejects_empty_list() {
        let error = Recipient::parse_all::<&str>(&[]).unwrap_err();
        assert!(error.is_validation());
    }
}
