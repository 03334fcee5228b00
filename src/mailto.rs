//! `mailto:` link construction.
//!
//! The contact form has no backend: submitting it opens the visitor's mail
//! client through a `mailto:` URI carrying the subject and a body composed
//! from the form fields. The site script builds the link in the browser; this
//! module is the same construction on the Rust side, used by the `mailto`
//! CLI command, by content validation of `mailto:` hrefs, and by tests.
//!
//! ## Format
//!
//! ```text
//! mailto:<recipient>?subject=<pct(subject)>&body=<pct(body)>
//!
//! body = "Nombre: {name}\nEmail: {email}\n\nMensaje:\n{message}"
//! ```
//!
//! Percent-encoding follows RFC 3986: everything except `A-Z a-z 0-9 - . _ ~`
//! is encoded, spaces become `%20` (never `+`).

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MailtoError {
    #[error("not a mailto link: {0}")]
    NotMailto(String),
    #[error("mailto link has no recipient: {0}")]
    MissingRecipient(String),
    #[error("invalid percent-encoding in {0}")]
    BadEncoding(String),
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Mail body: sender identity first, then the message.
    pub fn body(&self) -> String {
        format!(
            "Nombre: {}\nEmail: {}\n\nMensaje:\n{}",
            self.name, self.email, self.message
        )
    }
}

/// A decoded `mailto:` link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailtoLink {
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl MailtoLink {
    /// Plain link to an address, no pre-filled fields.
    pub fn to_address(recipient: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: None,
            body: None,
        }
    }

    /// Link the contact form opens for `message`.
    pub fn from_message(recipient: &str, message: &ContactMessage) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: Some(message.subject.clone()),
            body: Some(message.body()),
        }
    }

    /// Encode as a URI.
    pub fn to_uri(&self) -> String {
        let mut uri = format!("mailto:{}", self.recipient);
        let mut separator = '?';
        for (key, value) in [("subject", &self.subject), ("body", &self.body)] {
            if let Some(value) = value {
                uri.push(separator);
                uri.push_str(key);
                uri.push('=');
                uri.push_str(&urlencoding::encode(value));
                separator = '&';
            }
        }
        uri
    }

    /// Decode a `mailto:` URI. Unknown header fields (`cc`, `bcc`, …) are ignored.
    pub fn parse(uri: &str) -> Result<Self, MailtoError> {
        let rest = uri
            .strip_prefix("mailto:")
            .ok_or_else(|| MailtoError::NotMailto(uri.to_string()))?;
        let (recipient, query) = match rest.split_once('?') {
            Some((recipient, query)) => (recipient, Some(query)),
            None => (rest, None),
        };
        if recipient.is_empty() {
            return Err(MailtoError::MissingRecipient(uri.to_string()));
        }

        let mut link = Self::to_address(&decode(recipient, uri)?);
        for pair in query.into_iter().flat_map(|q| q.split('&')) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key.to_ascii_lowercase().as_str() {
                "subject" => link.subject = Some(decode(value, uri)?),
                "body" => link.body = Some(decode(value, uri)?),
                _ => {}
            }
        }
        Ok(link)
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

fn decode(value: &str, uri: &str) -> Result<String, MailtoError> {
    urlencoding::decode(value)
        .map(Cow::into_owned)
        .map_err(|_| MailtoError::BadEncoding(uri.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> ContactMessage {
        ContactMessage {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            subject: "Consulta".to_string(),
            message: "Hola".to_string(),
        }
    }

    #[test]
    fn body_composes_name_email_and_message() {
        assert_eq!(
            ana().body(),
            "Nombre: Ana\nEmail: ana@x.com\n\nMensaje:\nHola"
        );
    }

    #[test]
    fn contact_link_decodes_to_form_values() {
        let uri = MailtoLink::from_message("supap.eventos@gmail.com", &ana()).to_uri();
        let decoded = MailtoLink::parse(&uri).unwrap();
        assert_eq!(decoded.recipient, "supap.eventos@gmail.com");
        assert_eq!(decoded.subject.as_deref(), Some("Consulta"));
        assert_eq!(
            decoded.body.as_deref(),
            Some("Nombre: Ana\nEmail: ana@x.com\n\nMensaje:\nHola")
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let message = ContactMessage {
            subject: "¿Cuotas & pagos? 50%".to_string(),
            ..ana()
        };
        let uri = MailtoLink::from_message("a@b.uy", &message).to_uri();
        assert!(uri.starts_with("mailto:a@b.uy?subject="));
        assert!(uri.contains("%C2%BFCuotas%20%26%20pagos%3F%2050%25"));
        // newlines in the body, never raw
        assert!(uri.contains("%0A"));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains('+'));
    }

    #[test]
    fn ampersand_in_message_does_not_split_fields() {
        let message = ContactMessage {
            message: "a&body=b".to_string(),
            ..ana()
        };
        let uri = MailtoLink::from_message("a@b.uy", &message).to_uri();
        let decoded = MailtoLink::parse(&uri).unwrap();
        assert!(decoded.body.unwrap().ends_with("Mensaje:\na&body=b"));
    }

    #[test]
    fn plain_address_link() {
        let link = MailtoLink::to_address("supap.eventos@gmail.com");
        assert_eq!(link.to_uri(), "mailto:supap.eventos@gmail.com");
        assert_eq!(link.to_string(), link.to_uri());
    }

    #[test]
    fn empty_fields_still_encode() {
        let link = MailtoLink::from_message("a@b.uy", &ContactMessage::default());
        assert_eq!(
            link.to_uri(),
            "mailto:a@b.uy?subject=&body=Nombre%3A%20%0AEmail%3A%20%0A%0AMensaje%3A%0A"
        );
    }

    #[test]
    fn parse_rejects_other_schemes() {
        assert_eq!(
            MailtoLink::parse("https://instagram.com/supap.uy"),
            Err(MailtoError::NotMailto(
                "https://instagram.com/supap.uy".to_string()
            ))
        );
    }

    #[test]
    fn parse_rejects_missing_recipient() {
        assert!(matches!(
            MailtoLink::parse("mailto:?subject=x"),
            Err(MailtoError::MissingRecipient(_))
        ));
    }

    #[test]
    fn parse_ignores_unknown_headers() {
        let link = MailtoLink::parse("mailto:a@b.uy?cc=c@d.uy&subject=Hola").unwrap();
        assert_eq!(link.subject.as_deref(), Some("Hola"));
        assert_eq!(link.body, None);
    }

    #[test]
    fn parse_rejects_invalid_utf8_escape() {
        assert!(matches!(
            MailtoLink::parse("mailto:a@b.uy?subject=%FF"),
            Err(MailtoError::BadEncoding(_))
        ));
    }
}
