//! Email notification for new contact messages.
//!
//! The [`Notifier`] renders a human-readable notification (plain text
//! plus an HTML alternative) for one [`ContactMessage`] and hands it to
//! a [`MailTransport`]. Transport mechanics are deliberately behind the
//! trait: the shipped [`SendmailTransport`] pipes a finished RFC 5322
//! message to a sendmail-compatible program, and tests substitute a
//! recording transport.
//!
//! Delivery failures are returned to the caller. Contact intake treats
//! them as non-fatal: the message row is already durable by the time the
//! notifier runs.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::ContactMessage;
use crate::{Error, Result};

/// A composed notification email, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient address (the configured admin)
    pub to: String,

    /// Reply-To address (the submitter), enabling direct reply
    pub reply_to: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub text_body: String,

    /// HTML alternative body
    pub html_body: String,
}

/// Trait for outbound mail transports.
pub trait MailTransport: Send + Sync {
    /// Deliver the email, or report why delivery failed.
    fn send(&self, email: &OutboundEmail) -> Result<()>;

    /// Get the transport description (for display purposes).
    fn location(&self) -> String;
}

/// Transport that pipes the message to a sendmail-compatible program.
pub struct SendmailTransport {
    program: PathBuf,
}

impl SendmailTransport {
    /// Create a transport around the given sendmail-compatible program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MailTransport for SendmailTransport {
    fn send(&self, email: &OutboundEmail) -> Result<()> {
        // -t: read recipients from the message headers
        let mut child = Command::new(&self.program)
            .arg("-t")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Mail(format!("failed to run {}: {}", self.program.display(), e)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(format_mime(email).as_bytes())
                .map_err(|e| Error::Mail(format!("failed to write message: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Mail(format!("failed to wait for sendmail: {}", e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Mail(format!(
                "sendmail exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.program.display().to_string()
    }
}

/// Renders and sends notifications about new contact messages.
pub struct Notifier {
    admin_email: String,
    base_url: String,
    transport: Box<dyn MailTransport>,
}

impl Notifier {
    /// Create a notifier delivering to `admin_email` through `transport`.
    ///
    /// `base_url` is used to build the deep link to the administrative
    /// record in the HTML body.
    pub fn new(
        admin_email: impl Into<String>,
        base_url: impl Into<String>,
        transport: Box<dyn MailTransport>,
    ) -> Self {
        Self {
            admin_email: admin_email.into(),
            base_url: base_url.into(),
            transport,
        }
    }

    /// Render and send the notification for one contact message.
    pub fn notify_new_message(&self, message: &ContactMessage) -> Result<()> {
        let email = self.compose(message);
        self.transport.send(&email)
    }

    /// Render the notification email without sending it.
    pub fn compose(&self, message: &ContactMessage) -> OutboundEmail {
        OutboundEmail {
            to: self.admin_email.clone(),
            reply_to: message.email.clone(),
            subject: format!("New Contact Form Message: {}", message.subject),
            text_body: self.text_body(message),
            html_body: self.html_body(message),
        }
    }

    fn text_body(&self, message: &ContactMessage) -> String {
        let phone = if message.phone.is_empty() {
            "-"
        } else {
            &message.phone
        };
        format!(
            "New contact form message\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Subject: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             Received: {}\n\
             Message ID: {}\n",
            message.name,
            message.email,
            phone,
            message.subject,
            message.message,
            message.created_at.format("%Y-%m-%d %H:%M:%S"),
            message.id,
        )
    }

    fn html_body(&self, message: &ContactMessage) -> String {
        let phone = if message.phone.is_empty() {
            "-".to_string()
        } else {
            html_escape(&message.phone)
        };
        format!(
            "<html><body>\n\
             <h2>New Contact Form Message</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Phone:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n\
             <p><strong>Received:</strong> {}</p>\n\
             <p><a href=\"{}/admin/messages/{}\">Open message #{} in the admin</a></p>\n\
             </body></html>\n",
            html_escape(&message.name),
            html_escape(&message.email),
            phone,
            html_escape(&message.subject),
            html_escape(&message.message),
            message.created_at.format("%B %d, %Y at %I:%M %p"),
            self.base_url.trim_end_matches('/'),
            message.id,
            message.id,
        )
    }
}

/// Format the email as an RFC 5322 message with a multipart/alternative
/// body, ready to pipe to `sendmail -t`.
pub fn format_mime(email: &OutboundEmail) -> String {
    let boundary = boundary();
    format!(
        "To: {}\r\n\
         Reply-To: {}\r\n\
         Subject: {}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/alternative; boundary=\"{}\"\r\n\
         \r\n\
         --{}\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n\
         {}\r\n\
         --{}\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         \r\n\
         {}\r\n\
         --{}--\r\n",
        email.to,
        email.reply_to,
        email.subject,
        boundary,
        boundary,
        email.text_body,
        boundary,
        email.html_body,
        boundary,
    )
}

/// Time-derived MIME boundary, unique enough for sequential sends.
fn boundary() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("=_folio_{:x}", nanos)
}

/// Escape the characters HTML treats specially.
fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
