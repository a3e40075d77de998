use crate::core::draft::Outgoing;

/// Fire-and-forget send sink. There is no transport behind the mock, so
/// delivery is a structured log line; nothing is reported back.
pub fn deliver(outgoing: &Outgoing) {
    log::info!(
        "sending message to [{}], subject {:?}, {} body bytes",
        outgoing.recipients.join(", "),
        outgoing.subject,
        outgoing.body.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deliver_accepts_an_empty_body() {
        // Smoke test: the sink must never panic on degenerate payloads.
        deliver(&Outgoing {
            recipients: vec!["a@x.com".into()],
            subject: String::new(),
            body: String::new(),
        });
    }
}
