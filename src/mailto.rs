use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Recipient of the contact form.
pub const CONTACT_ADDRESS: &str = "eransevil2@gmail.com";

/// Characters escaped when embedding a string in a `mailto:` query
/// component. Matches JS `encodeURIComponent`: everything but ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded, so `&`, `=`
/// and newlines in user text can never break the URI structure.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// In-memory draft of the contact form. All fields are free-form text with
/// no validation; the draft is read once on submit and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Selects which draft field an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactFormDraft {
    /// Replace exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    fn subject(&self) -> String {
        format!("New message from {}", self.name)
    }

    fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }
}

/// Build the `mailto:` URI handed to the platform on submit. Empty fields
/// produce empty but correctly delimited segments.
pub fn mailto_uri(address: &str, draft: &ContactFormDraft) -> String {
    let subject_raw = draft.subject();
    let body_raw = draft.body();
    let subject = utf8_percent_encode(&subject_raw, URI_COMPONENT);
    let body = utf8_percent_encode(&body_raw, URI_COMPONENT);
    format!("mailto:{address}?subject={subject}&body={body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn draft(name: &str, email: &str, message: &str) -> ContactFormDraft {
        ContactFormDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Split a mailto URI into (address, decoded subject, decoded body).
    fn parse_mailto(uri: &str) -> (String, String, String) {
        let rest = uri.strip_prefix("mailto:").expect("mailto scheme");
        let (address, query) = rest.split_once('?').expect("query separator");
        let (subject, body) = query.split_once('&').expect("exactly one pair separator");
        let subject = subject.strip_prefix("subject=").expect("subject key");
        let body = body.strip_prefix("body=").expect("body key");
        let decode = |s: &str| {
            percent_decode_str(s)
                .decode_utf8()
                .expect("valid utf-8")
                .into_owned()
        };
        (address.to_string(), decode(subject), decode(body))
    }

    #[test]
    fn test_field_edits_are_independent() {
        let mut draft = ContactFormDraft::default();
        draft.set(ContactField::Name, "Ada".to_string());
        draft.set(ContactField::Message, "first".to_string());
        draft.set(ContactField::Email, "ada@example.com".to_string());
        // last write to a field wins, the others keep their values
        draft.set(ContactField::Message, "second".to_string());

        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.message, "second");
    }

    #[test]
    fn test_submit_produces_expected_subject_and_body() {
        let uri = mailto_uri(CONTACT_ADDRESS, &draft("Ada", "ada@example.com", "Hi"));
        let (address, subject, body) = parse_mailto(&uri);

        assert_eq!(address, "eransevil2@gmail.com");
        assert_eq!(subject, "New message from Ada");
        assert_eq!(body, "Name: Ada\nEmail: ada@example.com\n\nHi");
    }

    #[test]
    fn test_empty_draft_still_yields_well_formed_uri() {
        let uri = mailto_uri(CONTACT_ADDRESS, &ContactFormDraft::default());
        let (address, subject, body) = parse_mailto(&uri);

        assert_eq!(address, "eransevil2@gmail.com");
        assert_eq!(subject, "New message from ");
        assert_eq!(body, "Name: \nEmail: \n\n");
    }

    #[test]
    fn test_structural_separators_in_fields_are_escaped() {
        let uri = mailto_uri(
            CONTACT_ADDRESS,
            &draft("A&B=C", "a?b@example.com", "x&y=z?w#v"),
        );
        // the raw URI keeps exactly one '?' and one '&'
        assert_eq!(uri.matches('?').count(), 1);
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('#').count(), 0);

        let (_, subject, body) = parse_mailto(&uri);
        assert_eq!(subject, "New message from A&B=C");
        assert_eq!(body, "Name: A&B=C\nEmail: a?b@example.com\n\nx&y=z?w#v");
    }

    #[test]
    fn test_encoding_matches_encode_uri_component() {
        let uri = mailto_uri(CONTACT_ADDRESS, &draft("Ada Lovelace", "", ""));
        // spaces become %20 (never '+'), newlines %0A
        assert!(uri.contains("subject=New%20message%20from%20Ada%20Lovelace"));
        assert!(uri.contains("body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20%0A%0A"));

        // the encodeURIComponent unreserved set passes through untouched
        let uri = mailto_uri(CONTACT_ADDRESS, &draft("-_.!~*'()", "", ""));
        assert!(uri.contains("subject=New%20message%20from%20-_.!~*'()"));
    }

    #[test]
    fn test_non_ascii_round_trips_through_utf8_escapes() {
        let uri = mailto_uri(CONTACT_ADDRESS, &draft("Göran", "", "שלום"));
        assert!(uri.is_ascii());

        let (_, subject, body) = parse_mailto(&uri);
        assert_eq!(subject, "New message from Göran");
        assert_eq!(body, "Name: Göran\nEmail: \n\nשלום");
    }
}
