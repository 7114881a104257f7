//! Audio verbs: speech, playback, silence and recording

verb! {
    /// `<Say>` speaks the message back to the caller with text-to-speech.
    Say("Say") {
        text message,
        attrs {
            voice: "Voice",
            language: "Language",
            r#loop: "Loop",
        }
    }
}

verb! {
    /// `<Play>` plays an MP3 or WAV file fetched from `url`.
    ///
    /// With `media_storage = "true"` the text is a media name previously
    /// uploaded to the platform instead of a URL. Can be nested in
    /// [`Gather`](crate::verbs::Gather).
    Play("Play") {
        text url,
        attrs {
            r#loop: "Loop",
            media_storage: "MediaStorage",
        }
    }
}

verb! {
    /// `<Pause>` waits silently, one second unless `length` says otherwise.
    Pause("Pause") {
        attrs {
            length: "Length",
        }
    }
}

verb! {
    /// `<Record>` records the call audio.
    Record("Record") {
        attrs {
            action: "Action",
            method: "Method",
            finish_on_key: "FinishOnKey",
            timeout: "Timeout",
            max_length: "MaxLength",
            play_beep: "PlayBeep",
            trim: "Trim",
            channels: "Channels",
            recording_status_callback: "RecordingStatusCallback",
            recording_status_callback_method: "RecordingStatusCallbackMethod",
        }
    }
}
