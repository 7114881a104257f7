//! Call flow verbs: input collection, queues, redirection and teardown

verb! {
    /// `<Gather>` collects DTMF digits.
    ///
    /// Nest [`Say`](crate::verbs::Say) or [`Play`](crate::verbs::Play) to
    /// prompt the caller while waiting.
    Gather("Gather") {
        attrs {
            action: "Action",
            timeout: "Timeout",
            finish_on_key: "FinishOnKey",
            num_digits: "NumDigits",
            language: "Language",
            valid_digits: "ValidDigits",
            invalid_digits_action: "InvalidDigitsAction",
            min_digits: "MinDigits",
            max_digits: "MaxDigits",
        }
    }
}

verb! {
    /// `<Enqueue>` places the call in a call queue.
    Enqueue("Enqueue") {
        attrs {
            action: "Action",
            method: "Method",
            wait_url: "WaitUrl",
            wait_url_method: "WaitUrlMethod",
        }
    }
}

verb! {
    /// `<Leave>` takes the call out of its queue and continues after the
    /// original `<Enqueue>`.
    Leave("Leave") {
        attrs {}
    }
}

verb! {
    /// `<Hangup>` ends the call.
    Hangup("Hangup") {
        attrs {}
    }
}

verb! {
    /// `<Redirect>` hands control of the call to the document at `url`.
    Redirect("Redirect") {
        text url,
        attrs {
            method: "Method",
        }
    }
}

verb! {
    /// `<Reject>` refuses the call. Nothing after it is executed.
    Reject("Reject") {
        attrs {
            reason: "Reason",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_attributeless_verbs() {
        assert!(Hangup::default().attributes().1.is_empty());
        assert!(Leave::default().attributes().1.is_empty());
    }

    #[test]
    fn test_redirect() {
        let redirect = Redirect {
            url: "https://example.com/next".to_string(),
            method: "GET".to_string(),
            ..Redirect::default()
        };
        assert_eq!(redirect.text(), "https://example.com/next");
        assert_eq!(redirect.attributes().1.get("Method"), Some("GET"));
    }
}
